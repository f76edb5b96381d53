//! In-memory store
//!
//! Backs the users, roles, and team screens, which ship with demo rows and
//! never leave the process. Mutations apply directly to the held list, so
//! the reload after a mutation observes the new state just like a remote
//! round trip would.
//!
//! Tests also use this store as a double for the remote path: it counts
//! reads and mutations and can be told to reject the next mutation with a
//! server-style message.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::{EntityKind, EntityRecord, EntitySchema, FieldKind, RecordDraft};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<EntityKind, Vec<EntityRecord>>,
    fail_next_mutation: Option<String>,
    reads: usize,
    mutations: usize,
}

/// Process-local record store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo users, roles, and team rows
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        store.seed(EntityKind::User, demo_users());
        store.seed(EntityKind::Role, demo_roles());
        store.seed(EntityKind::TeamMember, demo_team());
        store
    }

    /// Replace all rows of one kind
    pub fn seed(&self, kind: EntityKind, rows: Vec<EntityRecord>) {
        self.lock().rows.insert(kind, rows);
    }

    /// Make the next mutation fail with a server-style message
    pub fn fail_next_mutation(&self, message: impl Into<String>) {
        self.lock().fail_next_mutation = Some(message.into());
    }

    /// How many reads this store has served
    pub fn reads(&self) -> usize {
        self.lock().reads
    }

    /// How many mutations this store has applied or rejected
    pub fn mutations(&self) -> usize {
        self.lock().mutations
    }

    /// Fetch all rows of a kind
    pub fn read(&self, kind: EntityKind) -> ConsoleResult<Vec<EntityRecord>> {
        let mut inner = self.lock();
        inner.reads += 1;
        Ok(inner.rows.get(&kind).cloned().unwrap_or_default())
    }

    /// Insert a validated draft, assigning the next numeric identity
    pub fn insert(&self, schema: &EntitySchema, draft: &RecordDraft) -> ConsoleResult<()> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let rows = inner.rows.entry(schema.kind).or_default();
        let next_id = rows
            .iter()
            .filter_map(|r| r.get_str(&schema.id_field)?.parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let mut record = EntityRecord::new();
        record.set(&schema.id_field, next_id);
        apply_draft(schema, draft, &mut record);
        rows.push(record);
        Ok(())
    }

    /// Replace the editable fields of an existing record
    pub fn edit(&self, schema: &EntitySchema, id: &str, draft: &RecordDraft) -> ConsoleResult<()> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let rows = inner.rows.entry(schema.kind).or_default();
        let record = rows
            .iter_mut()
            .find(|r| r.get_str(&schema.id_field).as_deref() == Some(id))
            .ok_or_else(|| {
                ConsoleError::not_found(schema.kind.display_name(), &schema.id_field, id)
            })?;
        apply_draft(schema, draft, record);
        Ok(())
    }

    /// Remove a record by identity
    pub fn delete(&self, schema: &EntitySchema, id: &str) -> ConsoleResult<()> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let rows = inner.rows.entry(schema.kind).or_default();
        let before = rows.len();
        rows.retain(|r| r.get_str(&schema.id_field).as_deref() != Some(id));
        if rows.len() == before {
            return Err(ConsoleError::not_found(
                schema.kind.display_name(),
                &schema.id_field,
                id,
            ));
        }
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Lock poisoning only happens if a panic escaped while holding it;
        // the store's data is still coherent for tests to inspect
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Inner {
    fn take_failure(&mut self) -> ConsoleResult<()> {
        self.mutations += 1;
        match self.fail_next_mutation.take() {
            Some(message) => Err(ConsoleError::server(message)),
            None => Ok(()),
        }
    }
}

/// Copy a draft's editable fields onto a record
///
/// Tag fields arrive from forms as comma-separated text but are stored as
/// arrays, matching how the demo rows hold role permissions.
fn apply_draft(schema: &EntitySchema, draft: &RecordDraft, record: &mut EntityRecord) {
    for field in schema.editable_fields() {
        let raw = draft.get_trimmed(&field.name);
        let value = if field.kind == FieldKind::Tags {
            Value::Array(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(Value::from)
                    .collect(),
            )
        } else {
            Value::from(raw)
        };
        record.set(&field.name, value);
    }
}

// ============================================================================
// Demo rows
// ============================================================================

fn records_from(raw: Value) -> Vec<EntityRecord> {
    serde_json::from_value(raw).unwrap_or_default()
}

fn demo_users() -> Vec<EntityRecord> {
    records_from(json!([
        {"id": 1, "name": "John Doe", "email": "john.doe@cafe.com", "role": "Admin", "status": "active"},
        {"id": 2, "name": "Jane Smith", "email": "jane.smith@cafe.com", "role": "Manager", "status": "active"},
        {"id": 3, "name": "Bob Johnson", "email": "bob.johnson@cafe.com", "role": "Staff", "status": "inactive"},
    ]))
}

fn demo_roles() -> Vec<EntityRecord> {
    records_from(json!([
        {"id": 1, "name": "Admin", "description": "Full access to all features",
         "permissions": ["dashboard_view", "roles_manage", "users_manage"]},
        {"id": 2, "name": "Manager", "description": "Manage products and categories",
         "permissions": ["dashboard_view", "products_manage", "categories_manage"]},
        {"id": 3, "name": "Staff", "description": "View dashboard and process orders",
         "permissions": ["dashboard_view", "orders_process"]},
    ]))
}

fn demo_team() -> Vec<EntityRecord> {
    records_from(json!([
        {"id": 1, "userId": 3, "name": "Bob Johnson", "email": "bob.johnson@cafe.com",
         "role": "Leader", "status": "active"},
        {"id": 2, "userId": 2, "name": "Jane Smith", "email": "jane.smith@cafe.com",
         "role": "Member", "status": "inactive"},
    ]))
}

// ============================================================================
// Tests
// ============================================================================
