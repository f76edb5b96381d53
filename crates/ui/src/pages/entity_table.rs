//! # Entity Table Page
//!
//! One page serves every entity's management screen: the columns, search
//! behavior, and form fields all come from the entity schema. The page
//! loads its list on mount and after every mutation the controller
//! reloads it from the store, so the table never shows locally patched
//! rows.

use cafe_client::LoadPhase;
use cafe_schema::{EntityKind, EntityRecord, EntitySchema};
use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::{Select, SelectOption};
use crate::state::{APP_STATE, Dialog};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct EntityTablePageProps {
    /// Which entity this page manages
    pub kind: EntityKind,
}

// ============================================================================
// Main Component
// ============================================================================

/// Management table for one entity kind
#[component]
pub fn EntityTablePage(props: EntityTablePageProps) -> Element {
    let kind = props.kind;

    // Load the list when the page mounts or the kind changes
    use_effect(use_reactive!(|(kind,)| {
        spawn(actions::reload(kind));
    }));

    let state = APP_STATE.read();
    let controller = state.controller(kind);
    let schema = controller.schema().clone();
    let records = controller.visible_records();
    let query = controller.state().query().to_string();
    let phase = controller.state().phase().clone();
    let group = state.product_group;
    drop(state);

    let grouped = matches!(kind, EntityKind::Category | EntityKind::Product);
    let plural_lower = kind.plural_name().to_lowercase();

    rsx! {
        div {
            class: "entity-page",

            // Header: title, search, group selector, add button
            div {
                class: "entity-header",

                h1 { class: "page-title", "{kind.plural_name()}" }

                div {
                    class: "entity-toolbar",

                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Search {plural_lower}...",
                        value: "{query}",
                        oninput: move |e| {
                            let value = e.value();
                            spawn(actions::search(kind, value));
                        },
                    }

                    if grouped {
                        Select {
                            value: group.display_name().to_string(),
                            options: group_options(),
                            on_change: move |value: String| {
                                if let Some(group) = group_from_name(&value) {
                                    spawn(actions::switch_product_group(group));
                                }
                            },
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            APP_STATE.write().ui.show_dialog(Dialog::NewRecord(kind));
                        },
                        "+ Add {kind.display_name()}"
                    }
                }
            }

            // Body: loading, error, empty, or the table
            match &phase {
                LoadPhase::Loading if records.is_empty() => rsx! {
                    div { class: "table-placeholder", "Loading {plural_lower}..." }
                },
                LoadPhase::Failed(message) if records.is_empty() => rsx! {
                    div {
                        class: "table-placeholder table-error",
                        p { "{message}" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| { spawn(actions::reload(kind)); },
                            "Retry"
                        }
                    }
                },
                _ => rsx! {
                    RecordTable { schema: schema.clone(), records: records.clone() }
                },
            }
        }
    }
}

// ============================================================================
// Record Table
// ============================================================================

#[component]
fn RecordTable(schema: EntitySchema, records: Vec<EntityRecord>) -> Element {
    let kind = schema.kind;
    let plural_lower = kind.plural_name().to_lowercase();

    rsx! {
        div {
            class: "table-wrap",

            table {
                class: "data-table",

                thead {
                    tr {
                        for field in schema.fields.iter() {
                            th { key: "{field.name}", "{field.label}" }
                        }
                        th { class: "actions-column", "Actions" }
                    }
                }

                tbody {
                    if records.is_empty() {
                        tr {
                            td {
                                colspan: "{schema.fields.len() + 1}",
                                class: "table-placeholder",
                                "No {plural_lower} found"
                            }
                        }
                    }

                    for record in records.iter() {
                        {
                            let id = record.id(&schema).unwrap_or_default();
                            let label = record_label(&schema, record);
                            rsx! {
                                tr {
                                    key: "{id}",

                                    for field in schema.fields.iter() {
                                        {
                                            let value = record.display_value(&schema, &field.name);
                                            rsx! {
                                                td { key: "{field.name}", "{value}" }
                                            }
                                        }
                                    }

                                    td {
                                        class: "actions-column",
                                        button {
                                            class: "btn btn-small",
                                            onclick: {
                                                let id = id.clone();
                                                move |_| {
                                                    APP_STATE.write().ui.show_dialog(
                                                        Dialog::EditRecord(kind, id.clone()),
                                                    );
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: {
                                                let id = id.clone();
                                                let label = label.clone();
                                                move |_| {
                                                    APP_STATE.write().ui.show_dialog(
                                                        Dialog::ConfirmDelete {
                                                            kind,
                                                            id: id.clone(),
                                                            label: label.clone(),
                                                        },
                                                    );
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Human-readable name of a record for delete prompts: the first
/// searchable non-identity field, falling back to the identity
fn record_label(schema: &EntitySchema, record: &EntityRecord) -> String {
    schema
        .searchable_fields()
        .find(|f| !f.is_identity())
        .and_then(|f| record.get_str(&f.name))
        .filter(|v| !v.trim().is_empty())
        .or_else(|| record.id(schema))
        .unwrap_or_else(|| "this record".to_string())
}

fn group_options() -> Vec<SelectOption> {
    cafe_client::ProductGroup::all()
        .iter()
        .map(|g| SelectOption::new(g.display_name(), g.display_name()))
        .collect()
}

fn group_from_name(name: &str) -> Option<cafe_client::ProductGroup> {
    cafe_client::ProductGroup::all()
        .iter()
        .copied()
        .find(|g| g.display_name() == name)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_schema::schema;

    #[test]
    fn test_record_label_prefers_name_field() {
        let brand_schema = schema(EntityKind::Brand);
        let record = EntityRecord::from_pairs([("ID", "7"), ("Brand Name", "Acme")]);
        assert_eq!(record_label(&brand_schema, &record), "Acme");
    }

    #[test]
    fn test_record_label_falls_back_to_identity() {
        let brand_schema = schema(EntityKind::Brand);
        let record = EntityRecord::from_pairs([("ID", "7")]);
        assert_eq!(record_label(&brand_schema, &record), "7");
    }

    #[test]
    fn test_group_round_trips_through_name() {
        for group in cafe_client::ProductGroup::all() {
            assert_eq!(group_from_name(group.display_name()), Some(*group));
        }
        assert_eq!(group_from_name("Smoothies"), None);
    }
}
