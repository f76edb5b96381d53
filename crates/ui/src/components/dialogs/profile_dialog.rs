//! # Profile Dialog
//!
//! Shows the signed-in identity and hosts the sign-out button.

use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

/// The signed-in profile with sign-out
#[component]
pub fn ProfileDialog() -> Element {
    let state = APP_STATE.read();
    let session = state.session().cloned();
    drop(state);

    let Some(session) = session else {
        // Dialog opened with no session; nothing to show
        return rsx! {
            div {
                class: "profile-dialog",
                p { class: "dialog-message", "Not signed in" }
            }
        };
    };

    rsx! {
        div {
            class: "profile-dialog",

            h2 { class: "dialog-title", "Profile" }

            div {
                class: "profile-fields",
                ProfileField { label: "ID", value: session.id.clone() }
                ProfileField { label: "Name", value: session.name.clone() }
                ProfileField { label: "Email", value: session.email.clone() }
                ProfileField { label: "Phone", value: session.phone.clone() }
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Close"
                }

                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| actions::logout(),
                    "Sign Out"
                }
            }
        }
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> Element {
    let shown = if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value
    };
    rsx! {
        div {
            class: "profile-field",
            span { class: "profile-field-label", "{label}" }
            span { class: "profile-field-value", "{shown}" }
        }
    }
}
