//! Entity catalog
//!
//! This module defines `EntityKind` (every entity type the console manages)
//! and `EntitySchema` (the exact field layout and wire shape of one kind).
//!
//! The schemas mirror the remote spreadsheets verbatim: identity fields are
//! `ID`, `Id`, or `id` depending on the sheet, brand names live under
//! `"Brand Name"`, product images under `"Image URL"`. Do not normalize.

use crate::field::{FieldKind, FieldSpec};
use cafe_core::{ConsoleError, ConsoleResult, Rule};
use serde::{Deserialize, Serialize};

// ============================================================================
// EntityKind
// ============================================================================

/// The entity types managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Brand,
    Category,
    Customer,
    Employee,
    Product,
    User,
    Role,
    TeamMember,
}

impl EntityKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Brand => "Brand",
            EntityKind::Category => "Category",
            EntityKind::Customer => "Customer",
            EntityKind::Employee => "Employee",
            EntityKind::Product => "Product",
            EntityKind::User => "User",
            EntityKind::Role => "Role",
            EntityKind::TeamMember => "Team Member",
        }
    }

    /// Get the plural display name (page titles)
    pub fn plural_name(&self) -> &'static str {
        match self {
            EntityKind::Brand => "Brands",
            EntityKind::Category => "Categories",
            EntityKind::Customer => "Customers",
            EntityKind::Employee => "Employees",
            EntityKind::Product => "Products",
            EntityKind::User => "Users",
            EntityKind::Role => "Roles",
            EntityKind::TeamMember => "Team Members",
        }
    }

    /// Which backend holds the records of this kind
    pub fn backend(&self) -> Backend {
        match self {
            EntityKind::User | EntityKind::Role | EntityKind::TeamMember => Backend::Memory,
            _ => Backend::Remote,
        }
    }

    /// Get all entity kinds
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Brand,
            EntityKind::Category,
            EntityKind::Customer,
            EntityKind::Employee,
            EntityKind::Product,
            EntityKind::User,
            EntityKind::Role,
            EntityKind::TeamMember,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where the records of an entity kind live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Spreadsheet-backed web endpoint; the remote store is the source of truth
    Remote,
    /// Local-session-scoped demo state; mutations apply directly in memory
    Memory,
}

// ============================================================================
// WireShape
// ============================================================================

/// How insert/edit payloads are serialized for this entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireShape {
    /// Fields are sent as named JSON members next to `action`
    Named,
    /// Fields are sent as a `values` array in schema order with a
    /// `dataType` discriminator (product endpoints)
    Positional,
}

// ============================================================================
// EntitySchema
// ============================================================================

/// The complete schema of one entity kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Which kind this schema describes
    pub kind: EntityKind,

    /// Identity field name as it appears in records (`ID`, `Id`, or `id`)
    pub id_field: String,

    /// Identity field name used in edit/delete payloads
    ///
    /// Categories return `Id` in records but expect `ID` in mutations.
    pub payload_id_field: String,

    /// Field carrying the server's last-modified marker in edit payloads,
    /// if the endpoint expects one (`lastModified` for brands,
    /// `LastModified` for categories)
    pub edit_stamp_field: Option<String>,

    /// Payload serialization shape
    pub wire: WireShape,

    /// Whether the client generates the identity on insert
    /// (customers use a timestamp-derived ID; everything else is
    /// server-assigned or user-entered)
    pub client_generated_id: bool,

    /// Ordered field specifications; for `WireShape::Positional` this order
    /// is the wire order of the `values` array
    pub fields: Vec<FieldSpec>,
}

impl EntitySchema {
    /// Look up a field spec by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field spec by wire name, erroring if absent
    pub fn require_field(&self, name: &str) -> ConsoleResult<&FieldSpec> {
        self.field(name).ok_or_else(|| {
            ConsoleError::internal(format!(
                "Unknown field '{}' for entity {}",
                name, self.kind
            ))
        })
    }

    /// Fields that appear in the add/edit form
    pub fn editable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.editable)
    }

    /// Fields the client-side search filter looks at
    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// All field names in wire order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// The identity field spec
    pub fn identity(&self) -> Option<&FieldSpec> {
        self.field(&self.id_field)
    }
}

// ============================================================================
// Schema catalog
// ============================================================================

/// Build the schema for an entity kind
///
/// Field names, placeholders, and search columns match the remote sheets
/// exactly; see module docs.
pub fn schema(kind: EntityKind) -> EntitySchema {
    match kind {
        EntityKind::Brand => EntitySchema {
            kind,
            id_field: "ID".to_string(),
            payload_id_field: "ID".to_string(),
            edit_stamp_field: Some("lastModified".to_string()),
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                FieldSpec::new("ID").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("Logo").kind(FieldKind::Url).rule(Rule::Url),
                FieldSpec::new("Brand Name").required().searchable(),
                FieldSpec::new("Description")
                    .kind(FieldKind::LongText)
                    .placeholder("No description")
                    .searchable(),
                FieldSpec::new("LastModified")
                    .kind(FieldKind::Timestamp)
                    .read_only(),
            ],
        },

        EntityKind::Category => EntitySchema {
            kind,
            id_field: "Id".to_string(),
            payload_id_field: "ID".to_string(),
            edit_stamp_field: Some("LastModified".to_string()),
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                FieldSpec::new("Id").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("Name").required().searchable(),
                FieldSpec::new("Description")
                    .kind(FieldKind::LongText)
                    .searchable(),
                // Determined by which group endpoint served the row; never
                // part of a mutation payload
                FieldSpec::new("CategoryType").label("Type").read_only(),
                FieldSpec::new("LastModified")
                    .kind(FieldKind::Timestamp)
                    .read_only(),
            ],
        },

        EntityKind::Customer => EntitySchema {
            kind,
            id_field: "ID".to_string(),
            payload_id_field: "ID".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Named,
            client_generated_id: true,
            fields: vec![
                FieldSpec::new("ID").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("Name").required().searchable(),
                FieldSpec::new("Email")
                    .kind(FieldKind::Email)
                    .required()
                    .rule(Rule::Email)
                    .searchable(),
                FieldSpec::new("Phone").kind(FieldKind::Phone).rule(Rule::Phone),
            ],
        },

        EntityKind::Employee => EntitySchema {
            kind,
            id_field: "ID".to_string(),
            payload_id_field: "ID".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                // Employees enter their own ID on creation
                FieldSpec::new("ID").kind(FieldKind::Identity).required(),
                FieldSpec::new("Name").required().searchable(),
                FieldSpec::new("Email")
                    .kind(FieldKind::Email)
                    .required()
                    .rule(Rule::Email)
                    .searchable(),
                FieldSpec::new("Phone")
                    .kind(FieldKind::Phone)
                    .required()
                    .rule(Rule::Phone),
                FieldSpec::new("Position").required().searchable(),
            ],
        },

        EntityKind::Product => EntitySchema {
            kind,
            id_field: "Id".to_string(),
            payload_id_field: "id".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Positional,
            client_generated_id: false,
            // Wire order of the `values` array; do not reorder
            fields: vec![
                FieldSpec::new("Id")
                    .kind(FieldKind::Identity)
                    .rule(Rule::IntegerId)
                    .read_only()
                    .searchable(),
                FieldSpec::new("Name").required().searchable(),
                FieldSpec::new("Category").searchable(),
                FieldSpec::new("Sizes"),
                FieldSpec::new("Price")
                    .kind(FieldKind::Price)
                    .required()
                    .rule(Rule::Price),
                FieldSpec::new("Description")
                    .kind(FieldKind::LongText)
                    .searchable(),
                FieldSpec::new("Brand").searchable(),
                FieldSpec::new("Image URL").kind(FieldKind::Url).rule(Rule::Url),
            ],
        },

        EntityKind::User => EntitySchema {
            kind,
            id_field: "id".to_string(),
            payload_id_field: "id".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                FieldSpec::new("id").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("name").label("Name").required().searchable(),
                FieldSpec::new("email")
                    .label("Email")
                    .kind(FieldKind::Email)
                    .rule(Rule::Email)
                    .searchable(),
                FieldSpec::new("role").label("Role"),
                FieldSpec::new("status").label("Status").kind(FieldKind::Status),
            ],
        },

        EntityKind::Role => EntitySchema {
            kind,
            id_field: "id".to_string(),
            payload_id_field: "id".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                FieldSpec::new("id").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("name").label("Name").required().searchable(),
                FieldSpec::new("description")
                    .label("Description")
                    .kind(FieldKind::LongText)
                    .searchable(),
                FieldSpec::new("permissions")
                    .label("Permissions")
                    .kind(FieldKind::Tags),
            ],
        },

        EntityKind::TeamMember => EntitySchema {
            kind,
            id_field: "id".to_string(),
            payload_id_field: "id".to_string(),
            edit_stamp_field: None,
            wire: WireShape::Named,
            client_generated_id: false,
            fields: vec![
                FieldSpec::new("id").kind(FieldKind::Identity).read_only(),
                FieldSpec::new("userId").label("User"),
                FieldSpec::new("name").label("Name").required().searchable(),
                FieldSpec::new("email")
                    .label("Email")
                    .kind(FieldKind::Email)
                    .rule(Rule::Email)
                    .searchable(),
                FieldSpec::new("role").label("Role"),
                FieldSpec::new("status").label("Status").kind(FieldKind::Status),
            ],
        },
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
    fn test_brand_schema_field_names() {
        let s = schema(EntityKind::Brand);
        assert_eq!(
            s.field_names(),
            vec!["ID", "Logo", "Brand Name", "Description", "LastModified"]
        );
        assert_eq!(s.id_field, "ID");
        assert_eq!(s.edit_stamp_field.as_deref(), Some("lastModified"));
    }

    #[test]
    fn test_product_schema_wire_order() {
        // The positional payload depends on this exact order
        let s = schema(EntityKind::Product);
        assert_eq!(s.wire, WireShape::Positional);
        assert_eq!(
            s.field_names(),
            vec![
                "Id",
                "Name",
                "Category",
                "Sizes",
                "Price",
                "Description",
                "Brand",
                "Image URL"
            ]
        );
    }

    #[test]
    fn test_identity_fields_are_not_normalized() {
        assert_eq!(schema(EntityKind::Brand).id_field, "ID");
        assert_eq!(schema(EntityKind::Product).id_field, "Id");
        assert_eq!(schema(EntityKind::User).id_field, "id");
        // Categories answer with `Id` but expect `ID` in mutations
        let cat = schema(EntityKind::Category);
        assert_eq!(cat.id_field, "Id");
        assert_eq!(cat.payload_id_field, "ID");
    }

    #[test]
    fn test_backends() {
        assert_eq!(EntityKind::Brand.backend(), Backend::Remote);
        assert_eq!(EntityKind::Product.backend(), Backend::Remote);
        assert_eq!(EntityKind::Role.backend(), Backend::Memory);
        assert_eq!(EntityKind::User.backend(), Backend::Memory);
        assert_eq!(EntityKind::TeamMember.backend(), Backend::Memory);
    }

    #[test]
    fn test_brand_description_placeholder() {
        let s = schema(EntityKind::Brand);
        let description = s.field("Description").unwrap();
        assert_eq!(description.placeholder, "No description");
        // Everything else keeps the default
        assert_eq!(s.field("Brand Name").unwrap().placeholder, "N/A");
    }

    #[test]
    fn test_customer_generates_its_own_id() {
        assert!(schema(EntityKind::Customer).client_generated_id);
        assert!(!schema(EntityKind::Brand).client_generated_id);
    }

    #[test]
    fn test_editable_fields_exclude_identity_and_stamp() {
        let s = schema(EntityKind::Brand);
        let editable: Vec<&str> = s.editable_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(editable, vec!["Logo", "Brand Name", "Description"]);
    }

    #[test]
    fn test_employee_id_is_user_entered() {
        let s = schema(EntityKind::Employee);
        let id = s.identity().unwrap();
        assert!(id.editable);
        assert!(id.is_required());
    }

    #[test]
    fn test_all_kinds_have_schemas() {
        for kind in EntityKind::all() {
            let s = schema(*kind);
            assert_eq!(s.kind, *kind);
            assert!(s.identity().is_some(), "{} lacks an identity field", kind);
            assert!(!s.fields.is_empty());
        }
    }
}
