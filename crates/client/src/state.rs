//! List state
//!
//! `ListState` holds one entity screen's loaded rows, search query, and
//! load phase. Loads are tokenized: every `begin_load` hands out a fresh
//! token, and only the newest token may land its result. A slow response
//! from an abandoned load can never overwrite rows a newer load already
//! delivered.
//!
//! The loaded rows are only ever replaced wholesale by a completed load.
//! Failures keep the previous rows on screen.

use cafe_schema::{EntityRecord, EntitySchema, filter_records};
use serde::{Deserialize, Serialize};

/// Identifies one load request; newer tokens win
pub type LoadToken = u64;

/// Where a screen's list currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// The last load landed
    Loaded,
    /// The last load failed; previous rows are still held
    Failed(String),
}

/// Rows, query, and load phase for one entity screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListState {
    records: Vec<EntityRecord>,
    query: String,
    phase: LoadPhase,
    next_token: LoadToken,
    inflight: Option<LoadToken>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load cycle
    // ========================================================================

    /// Start a load, superseding any in-flight one
    pub fn begin_load(&mut self) -> LoadToken {
        self.next_token += 1;
        let token = self.next_token;
        self.inflight = Some(token);
        self.phase = LoadPhase::Loading;
        token
    }

    /// Land a completed load; stale tokens are discarded
    ///
    /// Returns whether the rows were applied.
    pub fn complete_load(&mut self, token: LoadToken, records: Vec<EntityRecord>) -> bool {
        if self.inflight != Some(token) {
            return false;
        }
        self.records = records;
        self.inflight = None;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Record a failed load; stale tokens are discarded, rows are kept
    pub fn fail_load(&mut self, token: LoadToken, message: impl Into<String>) -> bool {
        if self.inflight != Some(token) {
            return false;
        }
        self.inflight = None;
        self.phase = LoadPhase::Failed(message.into());
        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All loaded rows, unfiltered
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    /// The rows matching the current query, for rendering
    pub fn filtered(&self, schema: &EntitySchema) -> Vec<EntityRecord> {
        filter_records(schema, &self.records, &self.query)
    }

    /// Find a loaded row by identity
    pub fn find(&self, schema: &EntitySchema, id: &str) -> Option<&EntityRecord> {
        self.records
            .iter()
            .find(|r| r.id(schema).as_deref() == Some(id))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search query; loaded rows are untouched
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The error message of the last failed load, if that is where we are
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
