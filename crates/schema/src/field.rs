//! Field specifications for entity schemas
//!
//! A `FieldSpec` describes one column of an entity exactly as the remote
//! endpoint names it, plus the validation rules and display behavior the
//! console applies to it.

use cafe_core::Rule;
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldKind
// ============================================================================

/// The broad kind of a field, used to pick input widgets and formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text
    #[default]
    Text,
    /// Multi-line text
    LongText,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Image or logo URL
    Url,
    /// Decimal price in dollars
    Price,
    /// Identity column
    Identity,
    /// Server-maintained modification stamp
    Timestamp,
    /// List of tag strings (role permissions)
    Tags,
    /// Active/inactive status flag
    Status,
}

impl FieldKind {
    /// Get a user-friendly display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::LongText => "Long Text",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone",
            FieldKind::Url => "URL",
            FieldKind::Price => "Price",
            FieldKind::Identity => "ID",
            FieldKind::Timestamp => "Timestamp",
            FieldKind::Tags => "Tags",
            FieldKind::Status => "Status",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Specification for one field of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Exact field name on the wire (e.g. `"Brand Name"`, `"Image URL"`)
    pub name: String,

    /// Label shown in table headers and form inputs
    pub label: String,

    /// Broad field kind
    pub kind: FieldKind,

    /// Validation rules applied to drafts before any network call
    pub rules: Vec<Rule>,

    /// Placeholder rendered when the value is missing or empty
    pub placeholder: String,

    /// Whether the client-side search filter looks at this field
    pub searchable: bool,

    /// Whether the field appears in the add/edit form
    pub editable: bool,
}

impl FieldSpec {
    /// Create a new text field with the default `N/A` placeholder
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind: FieldKind::Text,
            rules: Vec::new(),
            placeholder: "N/A".to_string(),
            searchable: false,
            editable: true,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the display label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the field kind
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a validation rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Mark the field required
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    /// Override the missing-value placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Include this field in client-side search
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Exclude the field from add/edit forms (identity, timestamps)
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether this field is required
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// Check whether this is the identity column
    pub fn is_identity(&self) -> bool {
        self.kind == FieldKind::Identity
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
    fn test_field_spec_defaults() {
        let field = FieldSpec::new("Brand Name");
        assert_eq!(field.name, "Brand Name");
        assert_eq!(field.label, "Brand Name");
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.placeholder, "N/A");
        assert!(field.editable);
        assert!(!field.searchable);
        assert!(!field.is_required());
    }

    #[test]
    fn test_field_spec_builder() {
        let field = FieldSpec::new("Description")
            .kind(FieldKind::LongText)
            .placeholder("No description")
            .searchable();

        assert_eq!(field.kind, FieldKind::LongText);
        assert_eq!(field.placeholder, "No description");
        assert!(field.searchable);
    }

    #[test]
    fn test_required_field() {
        let field = FieldSpec::new("Name").required();
        assert!(field.is_required());
        assert_eq!(field.rules, vec![Rule::Required]);
    }

    #[test]
    fn test_identity_field() {
        let field = FieldSpec::new("ID").kind(FieldKind::Identity).read_only();
        assert!(field.is_identity());
        assert!(!field.editable);
    }
}
