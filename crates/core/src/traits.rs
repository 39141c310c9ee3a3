//! Core traits for the console
//!
//! Behaviour shared by records and drafts: identity for list reconciliation,
//! client-side search, and the required-field check run before submission.

use crate::error::{ConsoleError, ConsoleResult};
use crate::types::{Customer, CustomerInput, EntityId, Subscription, SubscriptionInput};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for drafts that can be checked before submission
///
/// Only presence of required fields is checked. Formats (phone numbers,
/// amounts) are left to the server.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ConsoleError` describing the problem.
    fn validate(&self) -> ConsoleResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

impl Validatable for CustomerInput {
    fn validate(&self) -> ConsoleResult<()> {
        if is_blank(&self.full_name) {
            return Err(ConsoleError::validation("Full name is required"));
        }
        if is_blank(&self.mobile_number) {
            return Err(ConsoleError::validation("Mobile number is required"));
        }
        Ok(())
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if is_blank(&self.full_name) {
            errors.push("Full name is required".to_string());
        }
        if is_blank(&self.mobile_number) {
            errors.push("Mobile number is required".to_string());
        }
        errors
    }
}

impl Validatable for SubscriptionInput {
    fn validate(&self) -> ConsoleResult<()> {
        if self.customer_id.trim().is_empty() {
            return Err(ConsoleError::validation("Customer ID is required"));
        }
        if self.package_id.trim().is_empty() {
            return Err(ConsoleError::validation("Package ID is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Identified Trait
// ============================================================================

/// Trait for records that carry a server identifier
pub trait Identified {
    /// The record's identifier
    fn id(&self) -> &EntityId;
}

impl Identified for Customer {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Subscription {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

// ============================================================================
// Searchable Trait
// ============================================================================

/// Trait for records that can be matched against a client-side search term
pub trait Searchable {
    /// Whether the record matches `term`.
    ///
    /// Callers treat an empty term as matching everything, so
    /// implementations only see non-empty terms.
    fn matches(&self, term: &str) -> bool;
}

impl Searchable for Customer {
    /// Names and companies match case-insensitively; phone numbers match
    /// the raw term.
    fn matches(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();
        self.full_name.to_lowercase().contains(&lowered)
            || self.mobile_number.contains(term)
            || self.company_name.to_lowercase().contains(&lowered)
            || self.master_mobile_number.contains(term)
    }
}

impl Searchable for Subscription {
    fn matches(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();
        self.customer_full_name.to_lowercase().contains(&lowered)
            || self.package_name.to_lowercase().contains(&lowered)
            || self.customer_id.as_str().contains(term)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: EntityId::new("1"),
            full_name: "Ada Lovelace".to_string(),
            company_name: "Analytical Engines".to_string(),
            mobile_number: "+967777123".to_string(),
            master_mobile_number: "967700000".to_string(),
            creation_time: None,
        }
    }

    #[test]
    fn test_customer_input_requires_name_and_mobile() {
        let input = CustomerInput::default();
        assert!(!input.is_valid());
        assert_eq!(input.validation_errors().len(), 2);

        let input = CustomerInput {
            full_name: Some("Ada".to_string()),
            mobile_number: Some("123".to_string()),
            ..Default::default()
        };
        assert!(input.is_valid());
    }

    #[test]
    fn test_subscription_input_requires_references() {
        let mut input = SubscriptionInput::default();
        assert!(!input.is_valid());
        input.customer_id = "c-1".to_string();
        input.package_id = "p-1".to_string();
        assert!(input.is_valid());
    }

    #[test]
    fn test_search_names_case_insensitive() {
        let c = customer();
        assert!(c.matches("ADA"));
        assert!(c.matches("engines"));
        assert!(!c.matches("babbage"));
    }

    #[test]
    fn test_search_phone_numbers_raw() {
        let c = customer();
        assert!(c.matches("+967777"));
        assert!(c.matches("9677000"));
        assert!(!c.matches("555"));
    }
}
