//! # Record Form Dialog
//!
//! One dialog serves every entity's add and edit form: the fields come
//! from the entity schema, validation runs against the schema's rules
//! before anything is sent, and errors render inline next to the field
//! that failed.

use cafe_schema::{EntityKind, FieldKind, RecordDraft, ValidationOutcome, schema, validate_draft};
use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::{TextArea, TextInput};
use crate::state::APP_STATE;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct RecordFormDialogProps {
    /// Which entity the form belongs to
    pub kind: EntityKind,

    /// Identity of the record being edited; `None` means an add form
    #[props(default)]
    pub existing_id: Option<String>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Schema-driven add/edit form for one record
#[component]
pub fn RecordFormDialog(props: RecordFormDialogProps) -> Element {
    let kind = props.kind;
    let existing_id = props.existing_id.clone();

    let mut draft = use_signal({
        let existing_id = existing_id.clone();
        move || initial_draft(kind, existing_id.as_deref())
    });
    let mut outcome = use_signal(|| None::<ValidationOutcome>);
    let mut form_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let entity_schema = schema(kind);
    let title = if existing_id.is_some() {
        format!("Edit {}", kind.display_name())
    } else {
        format!("Add {}", kind.display_name())
    };

    let handle_submit = {
        let existing_id = existing_id.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let entity_schema = schema(kind);
            let current = draft.read().clone();

            let checked = validate_draft(&entity_schema, &current);
            if !checked.is_valid() {
                outcome.set(Some(checked));
                return;
            }
            outcome.set(None);
            form_error.set(None);

            let existing_id = existing_id.clone();
            spawn(async move {
                is_saving.set(true);
                if let Err(e) = actions::save_record(kind, existing_id, current).await {
                    form_error.set(Some(e.user_message()));
                }
                is_saving.set(false);
            });
        }
    };

    let saving = *is_saving.read();

    rsx! {
        form {
            class: "record-dialog",
            onsubmit: handle_submit,

            h2 { class: "dialog-title", "{title}" }

            // Surfaced when the store rejected an otherwise valid draft
            if let Some(error) = form_error.read().as_ref() {
                div { class: "form-banner-error", "{error}" }
            }

            div {
                class: "dialog-fields",

                for field in entity_schema.editable_fields() {
                    {
                        let name = field.name.clone();
                        let value = draft
                            .read()
                            .get(&name)
                            .unwrap_or_default()
                            .to_string();
                        let error = outcome
                            .read()
                            .as_ref()
                            .and_then(|o| o.error_for(&name))
                            .map(str::to_string);
                        let on_change = {
                            let name = name.clone();
                            move |v: String| draft.write().set(name.clone(), v)
                        };

                        match field.kind {
                            FieldKind::LongText => rsx! {
                                TextArea {
                                    key: "{name}",
                                    value,
                                    label: Some(field.label.clone()),
                                    error,
                                    required: field.is_required(),
                                    on_change,
                                }
                            },
                            _ => rsx! {
                                TextInput {
                                    key: "{name}",
                                    value,
                                    label: Some(field.label.clone()),
                                    input_type: input_type_for(field.kind).to_string(),
                                    error,
                                    required: field.is_required(),
                                    disabled: saving,
                                    on_change,
                                }
                            },
                        }
                    }
                }
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: saving,
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Cancel"
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving,
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Pre-fill the draft from the cached row when editing
fn initial_draft(kind: EntityKind, existing_id: Option<&str>) -> RecordDraft {
    let Some(id) = existing_id else {
        return RecordDraft::new();
    };
    let state = APP_STATE.read();
    let controller = state.controller(kind);
    match controller.state().find(controller.schema(), id) {
        Some(record) => RecordDraft::from_record(controller.schema(), record),
        None => RecordDraft::new(),
    }
}

/// HTML input type for a field kind
fn input_type_for(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Url => "url",
        FieldKind::Price => "number",
        _ => "text",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_mapping() {
        assert_eq!(input_type_for(FieldKind::Email), "email");
        assert_eq!(input_type_for(FieldKind::Price), "number");
        assert_eq!(input_type_for(FieldKind::Text), "text");
        assert_eq!(input_type_for(FieldKind::Status), "text");
    }
}
