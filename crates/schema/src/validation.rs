//! Draft validation
//!
//! Validates a `RecordDraft` against its `EntitySchema` before any payload
//! is built. Validation runs entirely client-side; a draft with errors
//! never reaches the network.

use crate::entity::EntitySchema;
use crate::record::RecordDraft;
use cafe_core::{ConsoleError, ConsoleResult, Rule};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ============================================================================
// Patterns
// ============================================================================

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Optional leading +, separators allowed; digit count checked separately
    RE.get_or_init(|| Regex::new(r"^\+?[0-9\s\-().]+$").unwrap())
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://\S+$").unwrap())
}

// ============================================================================
// Validation outcome
// ============================================================================

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,
    /// User-facing message
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating a full draft
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Per-field failures, in schema field order
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    /// Check whether the draft passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error message for a given field, for inline form display
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert into a `ConsoleResult`, surfacing the first failure
    pub fn into_result(self, schema: &EntitySchema) -> ConsoleResult<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(err) => Err(ConsoleError::field_validation(
                schema.kind.display_name(),
                err.field,
                err.message,
            )),
        }
    }
}

// ============================================================================
// Rule checking
// ============================================================================

/// Check one rule against one trimmed value
///
/// Rules other than `Required` are skipped on empty input; optional fields
/// like Logo and Phone only get format-checked when filled in.
fn check_rule(rule: &Rule, value: &str) -> bool {
    if value.is_empty() {
        return !rule.applies_to_empty();
    }
    match rule {
        Rule::Required => true,
        Rule::MinLength(n) => value.chars().count() >= *n,
        Rule::MaxLength(n) => value.chars().count() <= *n,
        Rule::Email => email_pattern().is_match(value),
        Rule::Url => url_pattern().is_match(value),
        Rule::Phone => {
            let digits = value.chars().filter(char::is_ascii_digit).count();
            phone_pattern().is_match(value) && (7..=15).contains(&digits)
        }
        Rule::Price => matches!(value.parse::<f64>(), Ok(p) if p >= 0.0 && p.is_finite()),
        Rule::IntegerId => value.parse::<i64>().is_ok(),
    }
}

/// Validate a draft against every editable field's rules
///
/// Errors come back in schema order, first failing rule per field.
pub fn validate_draft(schema: &EntitySchema, draft: &RecordDraft) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    for field in schema.editable_fields() {
        let value = draft.get_trimmed(&field.name);
        for rule in &field.rules {
            if !check_rule(rule, value) {
                outcome.errors.push(FieldError {
                    field: field.name.clone(),
                    message: rule.error_message(),
                });
                break;
            }
        }
    }
    outcome
}

// ============================================================================
// Standalone checks (session forms)
// ============================================================================

/// Check an email address the way the login/register forms do
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Check a phone number: 7 to 15 digits, separators allowed
pub fn is_valid_phone(value: &str) -> bool {
    check_rule(&Rule::Phone, value.trim())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityKind, schema};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_brand_draft_passes() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new()
            .with("Brand Name", "Acme")
            .with("Logo", "https://example.com/acme.png")
            .with("Description", "Beans and machines");

        assert!(validate_draft(&brand_schema, &draft).is_valid());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new().with("Description", "No name set");

        let outcome = validate_draft(&brand_schema, &draft);
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.error_for("Brand Name"),
            Some("This field is required")
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new().with("Brand Name", "   ");
        assert!(!validate_draft(&brand_schema, &draft).is_valid());
    }

    #[test]
    fn test_optional_url_skipped_when_empty() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new().with("Brand Name", "Acme");
        // Logo omitted entirely; Url rule must not fire
        assert!(validate_draft(&brand_schema, &draft).is_valid());

        let bad = RecordDraft::new()
            .with("Brand Name", "Acme")
            .with("Logo", "not a url");
        let outcome = validate_draft(&brand_schema, &bad);
        assert_eq!(outcome.error_for("Logo"), Some("Must be a valid URL"));
    }

    #[test]
    fn test_customer_email_format() {
        let customer_schema = schema(EntityKind::Customer);
        let draft = RecordDraft::new()
            .with("Name", "Maria")
            .with("Email", "maria-at-example.com");

        let outcome = validate_draft(&customer_schema, &draft);
        assert_eq!(
            outcome.error_for("Email"),
            Some("Must be a valid email address")
        );
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(is_valid_phone("555-0100"));
        assert!(is_valid_phone("+1 (555) 010-0199"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn test_product_price() {
        let product_schema = schema(EntityKind::Product);
        let good = RecordDraft::new().with("Name", "Latte").with("Price", "3.50");
        assert!(validate_draft(&product_schema, &good).is_valid());

        let negative = RecordDraft::new().with("Name", "Latte").with("Price", "-1");
        assert_eq!(
            validate_draft(&product_schema, &negative).error_for("Price"),
            Some("Must be a valid non-negative price")
        );

        let garbage = RecordDraft::new().with("Name", "Latte").with("Price", "free");
        assert!(!validate_draft(&product_schema, &garbage).is_valid());
    }

    #[test]
    fn test_first_failing_rule_wins_per_field() {
        let employee_schema = schema(EntityKind::Employee);
        let draft = RecordDraft::new().with("ID", "9").with("Name", "Ana");
        let outcome = validate_draft(&employee_schema, &draft);
        // Email and Phone and Position all missing; one error each
        assert_eq!(outcome.errors.len(), 3);
        for err in &outcome.errors {
            assert_eq!(err.message, "This field is required");
        }
    }

    #[test]
    fn test_into_result_surfaces_first_error() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new();
        let result = validate_draft(&brand_schema, &draft).into_result(&brand_schema);
        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Brand Name"));
    }

    #[test]
    fn test_email_helper() {
        assert!(is_valid_email("maria@example.com"));
        assert!(is_valid_email("  maria@example.com  "));
        assert!(!is_valid_email("maria@example"));
        assert!(!is_valid_email("maria example@test.com"));
    }
}
