//! # UI Components
//!
//! Reusable Dioxus components for the console:
//! - **Inputs**: form inputs (text, textarea, select)
//! - **Dialogs**: modal dialogs (record forms, delete confirmation,
//!   cart, receipt, profile)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{
    CartDialog, ConfirmDeleteDialog, ProfileDialog, ReceiptDialog, RecordFormDialog,
};
pub use inputs::{Select, SelectOption, TextArea, TextInput};
