//! Field validation rules
//!
//! Declarative validation rules attached to schema fields. Each rule knows
//! its user-facing error message; the actual checking lives in
//! `cafe_schema::validation`, which has access to the field values.

use serde::{Deserialize, Serialize};

/// Validation rules that can be attached to a schema field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Field must have a non-empty value
    Required,
    /// Minimum string length
    MinLength(usize),
    /// Maximum string length
    MaxLength(usize),
    /// Valid email address
    Email,
    /// Valid URL
    Url,
    /// Phone number, 7 to 15 digits
    Phone,
    /// Non-negative decimal price
    Price,
    /// Integer identity value
    IntegerId,
}

impl Rule {
    /// Get the user-facing error message for a failed rule
    pub fn error_message(&self) -> String {
        match self {
            Rule::Required => "This field is required".to_string(),
            Rule::MinLength(n) => format!("Minimum length is {} characters", n),
            Rule::MaxLength(n) => format!("Maximum length is {} characters", n),
            Rule::Email => "Must be a valid email address".to_string(),
            Rule::Url => "Must be a valid URL".to_string(),
            Rule::Phone => "Must be a valid phone number (7-15 digits)".to_string(),
            Rule::Price => "Must be a valid non-negative price".to_string(),
            Rule::IntegerId => "Invalid ID format".to_string(),
        }
    }

    /// Whether this rule still applies when the value is empty
    ///
    /// Only `Required` rejects an empty value; every other rule is checked
    /// against present input, matching the console's optional Logo/Phone
    /// fields.
    pub fn applies_to_empty(&self) -> bool {
        matches!(self, Rule::Required)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::MinLength(n) => write!(f, "min_length({})", n),
            Rule::MaxLength(n) => write!(f, "max_length({})", n),
            Rule::Email => write!(f, "email"),
            Rule::Url => write!(f, "url"),
            Rule::Phone => write!(f, "phone"),
            Rule::Price => write!(f, "price"),
            Rule::IntegerId => write!(f, "integer_id"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_messages() {
        assert_eq!(Rule::Required.error_message(), "This field is required");
        assert_eq!(
            Rule::MinLength(8).error_message(),
            "Minimum length is 8 characters"
        );
        assert_eq!(
            Rule::Email.error_message(),
            "Must be a valid email address"
        );
    }

    #[test]
    fn test_only_required_applies_to_empty() {
        assert!(Rule::Required.applies_to_empty());
        assert!(!Rule::Url.applies_to_empty());
        assert!(!Rule::Phone.applies_to_empty());
        assert!(!Rule::Price.applies_to_empty());
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Required.to_string(), "required");
        assert_eq!(Rule::MinLength(8).to_string(), "min_length(8)");
        assert_eq!(Rule::Price.to_string(), "price");
    }
}
