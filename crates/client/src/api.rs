//! Wire protocol for the spreadsheet-backed endpoints
//!
//! Every endpoint speaks the same envelope: reads are
//! `GET <url>?action=read`, mutations are a JSON `POST` with an `action`
//! member (`insert`, `edit`, `delete`) next to the entity fields, and every
//! answer is `{status, data, message}`. `status` is `"success"` or
//! `"error"`; `data` carries the rows for reads and is ignored for
//! mutations.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::EntityRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ApiAction
// ============================================================================

/// The verbs the endpoints understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiAction {
    Read,
    Insert,
    Edit,
    Delete,
}

impl ApiAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::Read => "read",
            ApiAction::Insert => "insert",
            ApiAction::Edit => "edit",
            ApiAction::Delete => "delete",
        }
    }

    /// Whether this action changes remote state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ApiAction::Read)
    }
}

impl std::fmt::Display for ApiAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ApiResponse
// ============================================================================

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// The `{status, data, message}` envelope every endpoint returns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Interpret the envelope for a read: success yields the record list
    ///
    /// A success answer whose `data` is not an array is malformed; the
    /// caller must keep its previously loaded rows in that case.
    pub fn into_records(self) -> ConsoleResult<Vec<EntityRecord>> {
        match self.status {
            ApiStatus::Error => Err(ConsoleError::server(self.message_or_default())),
            ApiStatus::Success => match self.data {
                Some(Value::Array(rows)) => rows
                    .into_iter()
                    .map(|row| match row {
                        Value::Object(map) => Ok(EntityRecord::from(map)),
                        other => Err(ConsoleError::malformed(format!(
                            "expected a record object, got {}",
                            json_type_name(&other)
                        ))),
                    })
                    .collect(),
                Some(other) => Err(ConsoleError::malformed(format!(
                    "expected an array in 'data', got {}",
                    json_type_name(&other)
                ))),
                None => Err(ConsoleError::malformed("missing 'data' in read response")),
            },
        }
    }

    /// Interpret the envelope for a mutation: only the status matters
    pub fn into_ack(self) -> ConsoleResult<()> {
        match self.status {
            ApiStatus::Success => Ok(()),
            ApiStatus::Error => Err(ConsoleError::server(self.message_or_default())),
        }
    }

    fn message_or_default(&self) -> String {
        match &self.message {
            Some(m) if !m.trim().is_empty() => m.clone(),
            _ => "The server reported an error".to_string(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(raw: Value) -> ApiResponse {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(ApiAction::Read.as_str(), "read");
        assert_eq!(ApiAction::Insert.as_str(), "insert");
        assert_eq!(ApiAction::Edit.as_str(), "edit");
        assert_eq!(ApiAction::Delete.as_str(), "delete");
        assert!(!ApiAction::Read.is_mutation());
        assert!(ApiAction::Delete.is_mutation());
    }

    #[test]
    fn test_successful_read_yields_records() {
        let response = parse(json!({
            "status": "success",
            "data": [
                {"ID": "1", "Brand Name": "Acme"},
                {"ID": "2", "Brand Name": "Bonn"}
            ]
        }));

        let records = response.into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_str("Brand Name"), Some("Acme".to_string()));
    }

    #[test]
    fn test_error_status_surfaces_server_message() {
        let response = parse(json!({
            "status": "error",
            "message": "locked"
        }));

        let err = response.into_records().unwrap_err();
        assert_eq!(err.to_string(), "locked");
        assert!(err.is_remote());
    }

    #[test]
    fn test_success_with_non_array_data_is_malformed() {
        let response = parse(json!({
            "status": "success",
            "data": {"ID": "1"}
        }));

        let err = response.into_records().unwrap_err();
        assert!(matches!(err, ConsoleError::MalformedResponse(_)));
    }

    #[test]
    fn test_success_with_missing_data_is_malformed() {
        let response = parse(json!({"status": "success"}));
        let err = response.into_records().unwrap_err();
        assert!(matches!(err, ConsoleError::MalformedResponse(_)));
    }

    #[test]
    fn test_mutation_ack() {
        let ok = parse(json!({"status": "success", "message": "inserted"}));
        assert!(ok.into_ack().is_ok());

        let failed = parse(json!({"status": "error", "message": "locked"}));
        let err = failed.into_ack().unwrap_err();
        assert_eq!(err.to_string(), "locked");
    }

    #[test]
    fn test_blank_error_message_gets_default() {
        let response = parse(json!({"status": "error", "message": ""}));
        let err = response.into_ack().unwrap_err();
        assert_eq!(err.to_string(), "The server reported an error");
    }
}
