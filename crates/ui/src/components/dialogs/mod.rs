//! # Dialog Components
//!
//! Modal dialogs for the console:
//! - **RecordFormDialog**: schema-driven add/edit form for any entity
//! - **ConfirmDeleteDialog**: delete confirmation
//! - **CartDialog** / **ReceiptDialog**: cart contents and checkout receipt
//! - **ProfileDialog**: signed-in identity and sign-out

pub mod cart_dialog;
pub mod confirm_delete;
pub mod profile_dialog;
pub mod record_dialog;

pub use cart_dialog::{CartDialog, ReceiptDialog};
pub use confirm_delete::ConfirmDeleteDialog;
pub use profile_dialog::ProfileDialog;
pub use record_dialog::RecordFormDialog;
