//! # Register Page
//!
//! Account registration form. A successful registration submits the new
//! account to the account sheet and signs the user in immediately.

use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::TextInput;
use crate::state::{APP_STATE, Page};

/// Account registration page
#[component]
pub fn RegisterPage() -> Element {
    let mut id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let (id, name, email, password, phone) = (
            id.read().clone(),
            name.read().clone(),
            email.read().clone(),
            password.read().clone(),
            phone.read().clone(),
        );
        spawn(async move {
            is_submitting.set(true);
            match actions::register(id, name, email, password, phone).await {
                Ok(()) => error.set(None),
                Err(e) => error.set(Some(e.user_message())),
            }
            is_submitting.set(false);
        });
    };

    let submitting = *is_submitting.read();

    rsx! {
        div {
            class: "auth-page",

            form {
                class: "auth-card",
                onsubmit: handle_submit,

                h1 { class: "auth-title", "☕ Café Code" }
                p { class: "auth-subtitle", "Create your account" }

                if let Some(message) = error.read().as_ref() {
                    div { class: "form-banner-error", "{message}" }
                }

                TextInput {
                    value: id.read().clone(),
                    label: Some("ID".to_string()),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| id.set(v),
                }

                TextInput {
                    value: name.read().clone(),
                    label: Some("Name".to_string()),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| name.set(v),
                }

                TextInput {
                    value: email.read().clone(),
                    label: Some("Email".to_string()),
                    input_type: "email".to_string(),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| email.set(v),
                }

                TextInput {
                    value: password.read().clone(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    placeholder: Some("At least 8 characters".to_string()),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| password.set(v),
                }

                TextInput {
                    value: phone.read().clone(),
                    label: Some("Phone".to_string()),
                    input_type: "tel".to_string(),
                    placeholder: Some("Digits only, optional".to_string()),
                    disabled: submitting,
                    on_change: move |v| phone.set(v),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: submitting,
                    if submitting { "Creating account..." } else { "Register" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a {
                        href: "#",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            APP_STATE.write().ui.navigate(Page::Login);
                        },
                        "Sign In"
                    }
                }
            }
        }
    }
}
