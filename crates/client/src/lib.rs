//! # Café Client
//!
//! Store access and client-side state for the Café Code console. This crate
//! owns everything between the schemas and the UI:
//!
//! - **api**: the `{status, data, message}` response envelope and the
//!   `action` verbs the spreadsheet endpoints understand
//! - **endpoints**: the per-entity endpoint registry
//! - **http / memory / store**: the remote store client with read retry,
//!   the in-memory demo store, and the handle that dispatches between them
//! - **state / controller**: list state with stale-load protection and the
//!   generic load/filter/mutate controller every entity screen shares
//! - **session / cart / local_store**: identity, storefront cart, and the
//!   JSON key-value file both persist into
//! - **sales**: deterministic sample series for the dashboard
//!
//! Mutations follow a strict cycle: validate locally, send the mutation,
//! then reload the full list from the store. The client never patches its
//! cached rows from a mutation response.

// Module declarations
pub mod api;
pub mod cart;
pub mod controller;
pub mod endpoints;
pub mod http;
pub mod local_store;
pub mod memory;
pub mod payload;
pub mod sales;
pub mod session;
pub mod state;
pub mod store;

// Re-export commonly used types at crate root
pub use api::{ApiAction, ApiResponse, ApiStatus};
pub use cart::{Cart, CartItem, format_usd};
pub use controller::{EntityListController, LoadOutcome, PendingLoad, PendingMutation};
pub use endpoints::{EndpointConfig, Endpoints, ProductGroup};
pub use http::{HttpStore, RetryPolicy};
pub use local_store::LocalStore;
pub use memory::MemoryStore;
pub use sales::{SalesPeriod, SalesPoint, SalesReport};
pub use session::{AccountSource, Session, SessionGate};
pub use state::{ListState, LoadPhase, LoadToken};
pub use store::{Mutation, StoreHandle};

// Re-export core and schema types that appear in this crate's API
pub use cafe_core::{ConsoleError, ConsoleResult};
pub use cafe_schema::{EntityKind, EntityRecord, RecordDraft};
