//! # Confirm Delete Dialog
//!
//! Destructive deletes go through this dialog; nothing reaches the store
//! until the user explicitly confirms. The prompt names the record so the
//! user knows exactly what they are deleting.

use cafe_schema::EntityKind;
use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Entity the record belongs to
    pub kind: EntityKind,

    /// Identity of the record to delete
    pub id: String,

    /// Human-readable name shown in the prompt
    pub label: String,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut is_deleting = use_signal(|| false);

    let kind = props.kind;
    let handle_delete = {
        let id = props.id.clone();
        move |_| {
            let id = id.clone();
            spawn(async move {
                is_deleting.set(true);
                actions::delete_record(kind, id).await;
                is_deleting.set(false);
            });
        }
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "confirm-delete-dialog",

            div {
                class: "dialog-header",
                span { class: "dialog-warning-icon", "⚠️" }
                div {
                    h2 { class: "dialog-title dialog-title-danger", "Delete {kind.display_name()}" }
                    p {
                        class: "dialog-message",
                        "Are you sure you want to delete \"{props.label}\"? This action cannot be undone."
                    }
                }
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: deleting,
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: handle_delete,
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
