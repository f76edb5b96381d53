//! Mutation payload building
//!
//! Builds the JSON bodies the endpoints expect for `insert`, `edit`, and
//! `delete`, honoring each schema's wire quirks:
//!
//! - named entities send their editable fields as top-level members
//! - edits carry the payload identity field (`ID` even where the record
//!   says `Id`) and, where the deployment tracks it, a fresh
//!   modification stamp
//! - customers get a client-generated millisecond identity on insert
//! - products send a `values` array in schema order with a `dataType`
//!   discriminator, and delete by lowercase `id`
//!
//! Drafts are assumed validated; blank optional fields become empty
//! strings, matching what the sheets store.

use cafe_schema::{EntitySchema, FieldKind, RecordDraft, WireShape};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::api::ApiAction;

const PRODUCT_DATA_TYPE: &str = "products";

/// Build an insert body for a validated draft
pub fn insert_payload(schema: &EntitySchema, draft: &RecordDraft, now: DateTime<Utc>) -> Value {
    match schema.wire {
        WireShape::Positional => positional_payload(schema, draft, ApiAction::Insert, None),
        WireShape::Named => {
            let mut body = named_base(ApiAction::Insert);
            if schema.client_generated_id {
                body.insert(
                    schema.payload_id_field.clone(),
                    Value::from(now.timestamp_millis()),
                );
            }
            insert_editable_fields(schema, draft, &mut body);
            Value::Object(body)
        }
    }
}

/// Build an edit body for a validated draft targeting an existing record
pub fn edit_payload(
    schema: &EntitySchema,
    draft: &RecordDraft,
    id: &str,
    now: DateTime<Utc>,
) -> Value {
    match schema.wire {
        WireShape::Positional => positional_payload(schema, draft, ApiAction::Edit, Some(id)),
        WireShape::Named => {
            let mut body = named_base(ApiAction::Edit);
            body.insert(schema.payload_id_field.clone(), Value::from(id));
            if let Some(stamp_field) = &schema.edit_stamp_field {
                body.insert(stamp_field.clone(), Value::from(now.to_rfc3339()));
            }
            insert_editable_fields(schema, draft, &mut body);
            Value::Object(body)
        }
    }
}

/// Build a delete body for a record identity
pub fn delete_payload(schema: &EntitySchema, id: &str) -> Value {
    let mut body = named_base(ApiAction::Delete);
    if schema.wire == WireShape::Positional {
        // The product deployments delete by lowercase `id`
        body.insert("dataType".to_string(), Value::from(PRODUCT_DATA_TYPE));
    }
    body.insert(schema.payload_id_field.clone(), Value::from(id));
    Value::Object(body)
}

fn named_base(action: ApiAction) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("action".to_string(), Value::from(action.as_str()));
    body
}

fn insert_editable_fields(schema: &EntitySchema, draft: &RecordDraft, body: &mut Map<String, Value>) {
    for field in schema.editable_fields() {
        body.insert(
            field.name.clone(),
            Value::from(draft.get_trimmed(&field.name)),
        );
    }
}

/// Assemble the product-style body: every schema field in wire order
/// inside `values`, identity first (empty on insert), price as a number
fn positional_payload(
    schema: &EntitySchema,
    draft: &RecordDraft,
    action: ApiAction,
    id: Option<&str>,
) -> Value {
    let values: Vec<Value> = schema
        .fields
        .iter()
        .map(|field| {
            if field.is_identity() {
                return Value::from(id.unwrap_or(""));
            }
            let raw = draft.get_trimmed(&field.name);
            if field.kind == FieldKind::Price {
                return Value::from(raw.parse::<f64>().unwrap_or(0.0));
            }
            Value::from(raw)
        })
        .collect();

    json!({
        "action": action.as_str(),
        "dataType": PRODUCT_DATA_TYPE,
        "values": values,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_schema::{EntityKind, schema};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_brand_insert_sends_editable_fields_only() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new()
            .with("Brand Name", "Acme")
            .with("Logo", "https://example.com/acme.png")
            .with("Description", "Beans");

        let payload = insert_payload(&brand_schema, &draft, fixed_now());
        assert_eq!(
            payload,
            json!({
                "action": "insert",
                "Logo": "https://example.com/acme.png",
                "Brand Name": "Acme",
                "Description": "Beans",
            })
        );
    }

    #[test]
    fn test_brand_edit_carries_id_and_stamp() {
        let brand_schema = schema(EntityKind::Brand);
        let draft = RecordDraft::new().with("Brand Name", "Acme");

        let payload = edit_payload(&brand_schema, &draft, "7", fixed_now());
        let body = payload.as_object().unwrap();
        assert_eq!(body["action"], "edit");
        assert_eq!(body["ID"], "7");
        assert_eq!(body["lastModified"], "2025-03-14T09:26:53+00:00");
        assert_eq!(body["Brand Name"], "Acme");
        // Blank optional fields go out as empty strings
        assert_eq!(body["Logo"], "");
    }

    #[test]
    fn test_category_edit_uses_upper_id_and_stamp_casing() {
        let category_schema = schema(EntityKind::Category);
        let draft = RecordDraft::new()
            .with("Name", "Espresso")
            .with("Description", "Hot drinks");

        let payload = edit_payload(&category_schema, &draft, "3", fixed_now());
        let body = payload.as_object().unwrap();
        // Records carry `Id`, mutations want `ID` and `LastModified`
        assert_eq!(body["ID"], "3");
        assert!(body.contains_key("LastModified"));
        assert!(!body.contains_key("Id"));
        assert!(!body.contains_key("CategoryType"));
    }

    #[test]
    fn test_customer_insert_generates_millisecond_id() {
        let customer_schema = schema(EntityKind::Customer);
        let draft = RecordDraft::new()
            .with("Name", "Maria")
            .with("Email", "maria@example.com");

        let payload = insert_payload(&customer_schema, &draft, fixed_now());
        let body = payload.as_object().unwrap();
        assert_eq!(body["ID"], json!(fixed_now().timestamp_millis()));
        assert_eq!(body["Name"], "Maria");
    }

    #[test]
    fn test_employee_insert_takes_id_from_draft() {
        let employee_schema = schema(EntityKind::Employee);
        let draft = RecordDraft::new()
            .with("ID", "104")
            .with("Name", "Ana")
            .with("Email", "ana@example.com")
            .with("Phone", "555-0100")
            .with("Position", "Barista");

        let payload = insert_payload(&employee_schema, &draft, fixed_now());
        let body = payload.as_object().unwrap();
        assert_eq!(body["ID"], "104");
        assert_eq!(body["Position"], "Barista");
    }

    #[test]
    fn test_product_insert_is_positional() {
        let product_schema = schema(EntityKind::Product);
        let draft = RecordDraft::new()
            .with("Name", "Latte")
            .with("Category", "Espresso-Based Drinks")
            .with("Price", "3.50")
            .with("Brand", "Acme");

        let payload = insert_payload(&product_schema, &draft, fixed_now());
        assert_eq!(
            payload,
            json!({
                "action": "insert",
                "dataType": "products",
                "values": ["", "Latte", "Espresso-Based Drinks", "", 3.5, "", "Acme", ""],
            })
        );
    }

    #[test]
    fn test_product_edit_puts_id_in_values() {
        let product_schema = schema(EntityKind::Product);
        let draft = RecordDraft::new().with("Name", "Latte").with("Price", "4");

        let payload = edit_payload(&product_schema, &draft, "12", fixed_now());
        let values = payload["values"].as_array().unwrap();
        assert_eq!(values[0], "12");
        assert_eq!(values[1], "Latte");
        assert_eq!(values[4], json!(4.0));
    }

    #[test]
    fn test_delete_payloads() {
        let brand_schema = schema(EntityKind::Brand);
        assert_eq!(
            delete_payload(&brand_schema, "7"),
            json!({"action": "delete", "ID": "7"})
        );

        let product_schema = schema(EntityKind::Product);
        assert_eq!(
            delete_payload(&product_schema, "12"),
            json!({"action": "delete", "dataType": "products", "id": "12"})
        );

        let category_schema = schema(EntityKind::Category);
        assert_eq!(
            delete_payload(&category_schema, "3"),
            json!({"action": "delete", "ID": "3"})
        );
    }
}
