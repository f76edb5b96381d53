//! Entity list controller
//!
//! One controller drives every entity screen: load the list, filter it
//! client-side, and run mutations through a validate / send / reload
//! cycle. The reload after a successful mutation is the only way rows
//! change; mutation responses are treated as bare acknowledgements.
//!
//! Loads and mutations split into an issue step and an apply step so the
//! request itself can run without holding the controller. `start_load`
//! hands out a token under the caller's lock; the finished request comes
//! back through `finish_load`, where superseded tokens are discarded.

use cafe_core::ConsoleResult;
use cafe_schema::{
    EntityKind, EntityRecord, EntitySchema, RecordDraft, schema, validate_draft,
};
use tracing::{debug, info, warn};

use crate::state::{ListState, LoadToken};
use crate::store::{Mutation, StoreHandle};

/// Load/filter/mutate driver for one entity kind
#[derive(Debug, Clone)]
pub struct EntityListController {
    schema: EntitySchema,
    store: StoreHandle,
    state: ListState,
}

impl EntityListController {
    /// Create a controller for a kind backed by the given store
    pub fn new(kind: EntityKind, store: StoreHandle) -> Self {
        Self {
            schema: schema(kind),
            store,
            state: ListState::new(),
        }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Whether this kind's deployment filters reads itself
    pub fn uses_server_search(&self) -> bool {
        self.store.handles_search()
    }

    /// The rows to render under the current query
    ///
    /// Server-filtered kinds hold only matching rows already; re-applying
    /// the client filter there would drop hits the deployment matched on
    /// fields the local schema does not search.
    pub fn visible_records(&self) -> Vec<EntityRecord> {
        if self.uses_server_search() {
            self.state.records().to_vec()
        } else {
            self.state.filtered(&self.schema)
        }
    }

    /// Update the search query
    ///
    /// Stays client-side; callers dealing with a server-search deployment
    /// follow up with a `refresh`.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    // ========================================================================
    // Sync cycle
    // ========================================================================

    /// Issue a load against the shared list state
    ///
    /// The returned request owns everything it needs, so the caller can
    /// run it without holding the controller. Overlapping loads are
    /// sequenced by the token: only the newest one lands in `finish_load`.
    pub fn start_load(&mut self) -> PendingLoad {
        PendingLoad {
            token: self.state.begin_load(),
            schema: self.schema.clone(),
            store: self.store.clone(),
            search: self.state.query().to_string(),
        }
    }

    /// Apply a finished load; superseded tokens are discarded
    ///
    /// Returns the load error only when the failure actually landed.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> ConsoleResult<()> {
        match outcome.result {
            Ok(records) => {
                let rows = records.len();
                if self.state.complete_load(outcome.token, records) {
                    info!(entity = %self.schema.kind, rows, "list loaded");
                } else {
                    debug!(entity = %self.schema.kind, token = outcome.token, "stale load discarded");
                }
                Ok(())
            }
            Err(err) => {
                if self.state.fail_load(outcome.token, err.user_message()) {
                    warn!(entity = %self.schema.kind, error = %err, "list load failed");
                    Err(err)
                } else {
                    debug!(
                        entity = %self.schema.kind,
                        token = outcome.token,
                        "stale load failure discarded"
                    );
                    Ok(())
                }
            }
        }
    }

    /// Reload the full list from the store
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let pending = self.start_load();
        let outcome = pending.run().await;
        self.finish_load(outcome)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate a draft and capture an insert for later submission
    ///
    /// A draft that fails validation never produces a store request.
    pub fn prepare_insert(&self, draft: &RecordDraft) -> ConsoleResult<PendingMutation> {
        validate_draft(&self.schema, draft).into_result(&self.schema)?;
        Ok(self.pending(Change::Insert(draft.clone())))
    }

    /// Validate a draft and capture an edit for later submission
    pub fn prepare_edit(&self, id: &str, draft: &RecordDraft) -> ConsoleResult<PendingMutation> {
        validate_draft(&self.schema, draft).into_result(&self.schema)?;
        Ok(self.pending(Change::Edit {
            id: id.to_string(),
            draft: draft.clone(),
        }))
    }

    /// Capture a delete for later submission
    ///
    /// Callers confirm with the user first; by the time this runs the
    /// decision is made.
    pub fn prepare_delete(&self, id: &str) -> PendingMutation {
        self.pending(Change::Delete { id: id.to_string() })
    }

    fn pending(&self, change: Change) -> PendingMutation {
        PendingMutation {
            schema: self.schema.clone(),
            store: self.store.clone(),
            change,
        }
    }

    /// Validate and insert a draft, then reload
    pub async fn create(&mut self, draft: &RecordDraft) -> ConsoleResult<()> {
        self.prepare_insert(draft)?.run().await?;
        self.refresh().await
    }

    /// Validate and edit an existing record, then reload
    pub async fn update(&mut self, id: &str, draft: &RecordDraft) -> ConsoleResult<()> {
        self.prepare_edit(id, draft)?.run().await?;
        self.refresh().await
    }

    /// Delete a record by identity, then reload
    pub async fn remove(&mut self, id: &str) -> ConsoleResult<()> {
        self.prepare_delete(id).run().await?;
        self.refresh().await
    }
}

// ============================================================================
// Pending requests
// ============================================================================

/// One issued load, runnable without holding the controller
#[derive(Debug)]
pub struct PendingLoad {
    token: LoadToken,
    schema: EntitySchema,
    store: StoreHandle,
    search: String,
}

impl PendingLoad {
    /// Run the request; the outcome goes back through `finish_load`
    pub async fn run(self) -> LoadOutcome {
        let result = self.store.load(&self.schema, Some(&self.search)).await;
        LoadOutcome {
            token: self.token,
            result,
        }
    }
}

/// A finished load waiting to be applied
#[derive(Debug)]
pub struct LoadOutcome {
    token: LoadToken,
    result: ConsoleResult<Vec<EntityRecord>>,
}

/// A validated mutation, runnable without holding the controller
#[derive(Debug)]
pub struct PendingMutation {
    schema: EntitySchema,
    store: StoreHandle,
    change: Change,
}

#[derive(Debug)]
enum Change {
    Insert(RecordDraft),
    Edit { id: String, draft: RecordDraft },
    Delete { id: String },
}

impl PendingMutation {
    /// Submit the mutation; callers reload the list afterwards
    pub async fn run(self) -> ConsoleResult<()> {
        let mutation = match &self.change {
            Change::Insert(draft) => Mutation::Insert(draft),
            Change::Edit { id, draft } => Mutation::Edit { id, draft },
            Change::Delete { id } => Mutation::Delete { id },
        };
        self.store.apply(&self.schema, mutation).await?;
        info!(entity = %self.schema.kind, verb = mutation.done_verb(), "record mutation applied");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Endpoints;
    use crate::http::HttpStore;
    use crate::memory::MemoryStore;
    use crate::state::LoadPhase;
    use pretty_assertions::assert_eq;

    fn role_controller() -> (EntityListController, MemoryStore) {
        let store = MemoryStore::with_demo_data();
        let controller = EntityListController::new(EntityKind::Role, StoreHandle::Memory(store.clone()));
        (controller, store)
    }

    #[tokio::test]
    async fn test_refresh_loads_rows() {
        let (mut controller, _) = role_controller();
        controller.refresh().await.unwrap();
        assert_eq!(controller.state().records().len(), 3);
        assert_eq!(*controller.state().phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_create_reloads_the_list() {
        let (mut controller, store) = role_controller();
        controller.refresh().await.unwrap();

        let draft = RecordDraft::new()
            .with("name", "Auditor")
            .with("description", "Read-only access");
        controller.create(&draft).await.unwrap();

        assert_eq!(controller.state().records().len(), 4);
        // One mutation, and a reload for the initial refresh plus one after
        assert_eq!(store.mutations(), 1);
        assert_eq!(store.reads(), 2);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_store() {
        let (mut controller, store) = role_controller();
        controller.refresh().await.unwrap();

        // Role name is required
        let draft = RecordDraft::new().with("description", "nameless");
        let err = controller.create(&draft).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.mutations(), 0);
        assert_eq!(controller.state().records().len(), 3);
    }

    #[tokio::test]
    async fn test_update_then_reload_shows_new_value() {
        let (mut controller, _) = role_controller();
        controller.refresh().await.unwrap();

        let draft = RecordDraft::new()
            .with("name", "Supervisor")
            .with("description", "Manage products and categories")
            .with("permissions", "dashboard_view");
        controller.update("2", &draft).await.unwrap();

        let row = controller.state().find(controller.schema(), "2").unwrap();
        assert_eq!(row.get_str("name"), Some("Supervisor".to_string()));
    }

    #[tokio::test]
    async fn test_remove_then_reload_drops_the_row() {
        let (mut controller, _) = role_controller();
        controller.refresh().await.unwrap();

        controller.remove("2").await.unwrap();

        assert_eq!(controller.state().records().len(), 2);
        assert!(controller.state().find(controller.schema(), "2").is_none());
    }

    #[tokio::test]
    async fn test_rejected_delete_leaves_list_unchanged() {
        let (mut controller, store) = role_controller();
        controller.refresh().await.unwrap();
        let before = controller.state().records().to_vec();

        store.fail_next_mutation("locked");
        let err = controller.remove("1").await.unwrap_err();

        assert_eq!(err.user_message(), "locked");
        assert_eq!(controller.state().records(), &before[..]);
        assert_eq!(*controller.state().phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_query_filters_without_touching_rows() {
        let (mut controller, _) = role_controller();
        controller.refresh().await.unwrap();

        controller.set_query("admin");
        assert_eq!(controller.visible_records().len(), 1);
        assert_eq!(controller.state().records().len(), 3);

        controller.set_query("");
        assert_eq!(controller.visible_records().len(), 3);
    }

    #[tokio::test]
    async fn test_out_of_order_completion_keeps_newest_rows() {
        let (mut controller, store) = role_controller();

        // An old request fetches before a change lands
        let old = controller.start_load();
        let old_outcome = old.run().await;

        let draft = RecordDraft::new().with("name", "Auditor");
        StoreHandle::Memory(store)
            .apply(controller.schema(), Mutation::Insert(&draft))
            .await
            .unwrap();

        let new = controller.start_load();
        let new_outcome = new.run().await;
        controller.finish_load(new_outcome).unwrap();
        assert_eq!(controller.state().records().len(), 4);

        // The superseded response applies last and must be discarded
        controller.finish_load(old_outcome).unwrap();
        assert_eq!(controller.state().records().len(), 4);
        assert_eq!(*controller.state().phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_query_edit_survives_inflight_load() {
        let (mut controller, _) = role_controller();

        let pending = controller.start_load();
        controller.set_query("admin");
        let outcome = pending.run().await;
        controller.finish_load(outcome).unwrap();

        assert_eq!(controller.state().query(), "admin");
        assert_eq!(controller.visible_records().len(), 1);
        assert_eq!(controller.state().records().len(), 3);
    }

    #[test]
    fn test_server_search_rows_bypass_client_filter() {
        let config = Endpoints::default().employees().clone();
        let mut controller = EntityListController::new(
            EntityKind::Employee,
            StoreHandle::Http(HttpStore::new(config)),
        );
        assert!(controller.uses_server_search());

        let token = controller.state_mut().begin_load();
        let rows = vec![
            EntityRecord::from_pairs([("ID", "E1"), ("Name", "Ana"), ("Position", "Barista")]),
            EntityRecord::from_pairs([("ID", "E2"), ("Name", "Borei"), ("Position", "Cashier")]),
        ];
        controller.state_mut().complete_load(token, rows);

        // The deployment already matched these rows on its own field set;
        // the local query must not thin them out again
        controller.set_query("barista");
        assert_eq!(controller.visible_records().len(), 2);
    }
}
