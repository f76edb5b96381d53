//! # Café Core
//!
//! Core types and error handling for the Café Code console.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Rules**: Declarative field validation rules (`Rule`)
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//!

pub mod error;
pub mod rules;

// Re-export commonly used items at crate root
pub use error::{ConsoleError, ConsoleResult, ResultExt};
pub use rules::Rule;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
