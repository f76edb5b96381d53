//! # Login Page
//!
//! Sign-in form against the account sheet. Validation errors and
//! credential failures render above the form; a successful sign-in
//! navigates to the dashboard.

use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::TextInput;
use crate::state::{APP_STATE, Page};

/// Sign-in page
#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let email = email.read().clone();
        let password = password.read().clone();
        spawn(async move {
            is_submitting.set(true);
            match actions::login(email, password).await {
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
                p { class: "auth-subtitle", "Sign in to the management console" }

                if let Some(message) = error.read().as_ref() {
                    div { class: "form-banner-error", "{message}" }
                }

                TextInput {
                    value: email.read().clone(),
                    label: Some("Email".to_string()),
                    input_type: "email".to_string(),
                    placeholder: Some("you@example.com".to_string()),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| email.set(v),
                }

                TextInput {
                    value: password.read().clone(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: submitting,
                    on_change: move |v| password.set(v),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Sign In" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            APP_STATE.write().ui.navigate(Page::Register);
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
