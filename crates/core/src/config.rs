//! Connection configuration
//!
//! Values are layered: built-in defaults, then a TOML file, then
//! environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};
use crate::preferences::app_config_dir;
use crate::traits::Validatable;

pub const ENV_BASE_URL: &str = "WACONSOLE_API_BASE_URL";
pub const ENV_TOKEN: &str = "WACONSOLE_API_TOKEN";
pub const ENV_TIMEOUT: &str = "WACONSOLE_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://neosending.com/api/neosending/Whatsapp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CUSTOMER_PAGE_SIZE: u32 = 100;
pub const DEFAULT_SUBSCRIPTION_PAGE_SIZE: u32 = 10;

/// Console configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL every resource path is appended to
    pub api_base_url: String,
    /// Bearer credential sent with every request
    pub api_token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Server-side page size for the customer list
    pub customer_page_size: u32,
    /// Server-side page size for the subscription list
    pub subscription_page_size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            customer_page_size: DEFAULT_CUSTOMER_PAGE_SIZE,
            subscription_page_size: DEFAULT_SUBSCRIPTION_PAGE_SIZE,
        }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &if self.api_token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("customer_page_size", &self.customer_page_size)
            .field("subscription_page_size", &self.subscription_page_size)
            .finish()
    }
}

impl ConsoleConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        app_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// read if present. Environment variables are applied last and the
    /// result is validated.
    pub fn load(path: Option<&Path>) -> ConsoleResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConsoleError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> ConsoleResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.api_token = token;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                ConsoleError::Config(format!("{} must be a whole number of seconds", ENV_TIMEOUT))
            })?;
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Validatable for ConsoleConfig {
    fn validate(&self) -> ConsoleResult<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConsoleError::Config("API base URL is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConsoleError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.api_token.trim().is_empty() {
            return Err(ConsoleError::Config(format!(
                "API token is missing; set api_token in the config file or {}",
                ENV_TOKEN
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConsoleError::Config("Timeout must be at least one second".into()));
        }
        if self.customer_page_size == 0 || self.subscription_page_size == 0 {
            return Err(ConsoleError::Config("Page sizes must be positive".into()));
        }
        Ok(())
    }
}
