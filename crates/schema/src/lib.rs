//! # Café Schema
//!
//! Entity catalog for the Café Code console. It contains the data
//! structures that describe every entity type managed by the console,
//! exactly as the remote spreadsheet endpoints expose them.
//!
//! ## Core Concepts
//!
//! - **EntityKind**: One of the managed entity types (Brand, Product, ...)
//! - **EntitySchema**: Field layout, identity field, and wire shape for a kind
//! - **EntityRecord**: One row of domain data as returned by the remote store
//! - **RecordDraft**: User input headed for an insert/edit, pre-validation
//! - **Validation**: Rule-driven draft checking before any network call
//! - **Filtering**: Pure, diacritic-insensitive client-side search
//!
//! Field naming is entity-specific and deliberately inconsistent (`ID` vs
//! `Id`, `Brand Name`, `Image URL`); the schemas preserve the exact names
//! the endpoints use and nothing here normalizes across entities.

// Module declarations
pub mod entity;
pub mod field;
pub mod filter;
pub mod record;
pub mod validation;

// Re-export commonly used types at crate root
pub use entity::{Backend, EntityKind, EntitySchema, WireShape, schema};
pub use field::{FieldKind, FieldSpec};
pub use filter::{filter_records, fold_for_search, record_matches};
pub use record::{EntityRecord, RecordDraft};
pub use validation::{FieldError, ValidationOutcome, validate_draft};

// Re-export core types that are commonly used with schemas
pub use cafe_core::{ConsoleError, ConsoleResult, Rule};
