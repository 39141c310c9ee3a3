//! Persisted user preferences
//!
//! Stored as JSON next to the config file. Read once at startup and written
//! back on every change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult, ResultExt};

/// Directory under `~/.config` holding console files
pub const APP_DIR: &str = "waconsole";

/// `~/.config/waconsole`, or `None` without a home directory
pub fn app_config_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    Some(PathBuf::from(home).join(".config").join(APP_DIR))
}

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Language code as stored
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Name shown in the language switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Document direction
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// User preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

impl Preferences {
    /// Default preferences file location
    pub fn default_path() -> Option<PathBuf> {
        app_config_dir().map(|dir| dir.join("preferences.json"))
    }

    /// Load from the default location.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default preferences");
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConsoleResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| ConsoleError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save to the default location
    pub fn save(&self) -> ConsoleResult<()> {
        let path = Self::default_path()
            .ok_or_else(|| ConsoleError::Config("No home directory for preferences".into()))?;
        self.save_to(&path)
    }

    /// Save to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> ConsoleResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context("Creating preferences directory")?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context("Writing preferences")?;
        tracing::debug!(path = %path.display(), "Preferences saved");
        Ok(())
    }
}
