//! Store dispatch
//!
//! `StoreHandle` is the single seam the controller talks through. Remote
//! entities get an `HttpStore` bound to their endpoint; the demo entities
//! get the shared `MemoryStore`. Both sides expose the same load/apply
//! surface so every entity screen shares one sync cycle.

use cafe_core::ConsoleResult;
use cafe_schema::{EntityRecord, EntitySchema, RecordDraft};
use chrono::Utc;

use crate::http::HttpStore;
use crate::memory::MemoryStore;
use crate::payload;

/// One mutation against a store
#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    Insert(&'a RecordDraft),
    Edit { id: &'a str, draft: &'a RecordDraft },
    Delete { id: &'a str },
}

impl Mutation<'_> {
    /// Past-tense verb for status messages
    pub fn done_verb(&self) -> &'static str {
        match self {
            Mutation::Insert(_) => "added",
            Mutation::Edit { .. } => "updated",
            Mutation::Delete { .. } => "deleted",
        }
    }
}

/// Handle on whichever store backs an entity kind
#[derive(Debug, Clone)]
pub enum StoreHandle {
    Http(HttpStore),
    Memory(MemoryStore),
}

impl StoreHandle {
    /// Whether the backing deployment filters reads itself
    pub fn handles_search(&self) -> bool {
        match self {
            StoreHandle::Http(http) => http.handles_search(),
            StoreHandle::Memory(_) => false,
        }
    }

    /// Load the full record list
    ///
    /// `search` only reaches the wire for deployments that filter
    /// server-side; everywhere else filtering stays client-side and the
    /// parameter is ignored.
    pub async fn load(
        &self,
        schema: &EntitySchema,
        search: Option<&str>,
    ) -> ConsoleResult<Vec<EntityRecord>> {
        match self {
            StoreHandle::Http(http) => http.read(search).await,
            StoreHandle::Memory(memory) => memory.read(schema.kind),
        }
    }

    /// Apply one mutation
    ///
    /// Succeeding here only means the store accepted it; callers must
    /// reload the list rather than patch their cached rows.
    pub async fn apply(&self, schema: &EntitySchema, mutation: Mutation<'_>) -> ConsoleResult<()> {
        match self {
            StoreHandle::Http(http) => {
                let body = match mutation {
                    Mutation::Insert(draft) => payload::insert_payload(schema, draft, Utc::now()),
                    Mutation::Edit { id, draft } => {
                        payload::edit_payload(schema, draft, id, Utc::now())
                    }
                    Mutation::Delete { id } => payload::delete_payload(schema, id),
                };
                http.mutate(body).await
            }
            StoreHandle::Memory(memory) => match mutation {
                Mutation::Insert(draft) => memory.insert(schema, draft),
                Mutation::Edit { id, draft } => memory.edit(schema, id, draft),
                Mutation::Delete { id } => memory.delete(schema, id),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_schema::{EntityKind, schema};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_memory_handle_round_trip() {
        let memory = MemoryStore::with_demo_data();
        let handle = StoreHandle::Memory(memory);
        let role_schema = schema(EntityKind::Role);

        let before = handle.load(&role_schema, None).await.unwrap();
        assert_eq!(before.len(), 3);

        let draft = RecordDraft::new().with("name", "Auditor");
        handle
            .apply(&role_schema, Mutation::Insert(&draft))
            .await
            .unwrap();

        let after = handle.load(&role_schema, None).await.unwrap();
        assert_eq!(after.len(), 4);
    }

    #[test]
    fn test_mutation_verbs() {
        let draft = RecordDraft::new();
        assert_eq!(Mutation::Insert(&draft).done_verb(), "added");
        assert_eq!(
            Mutation::Edit {
                id: "1",
                draft: &draft
            }
            .done_verb(),
            "updated"
        );
        assert_eq!(Mutation::Delete { id: "1" }.done_verb(), "deleted");
    }
}
