//! # Application Shell
//!
//! The root component and the chrome around the pages: toolbar, sidebar
//! navigation, status bar, and the modal dialog overlay. Pages that need
//! a session render the login page instead until someone signs in.

use dioxus::prelude::*;

use crate::components::{
    CartDialog, ConfirmDeleteDialog, ProfileDialog, ReceiptDialog, RecordFormDialog,
};
use crate::pages::{DashboardPage, EntityTablePage, LoginPage, RegisterPage, StorefrontPage};
use crate::state::{APP_STATE, Dialog, Page, StatusLevel, init_app_state};

// ============================================================================
// Root Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    init_app_state();

    let state = APP_STATE.read();
    let page = state.ui.active_page;
    let signed_in = state.gate.is_signed_in();
    let dialog = state.ui.active_dialog.clone();
    drop(state);

    // Session-gated pages fall back to the login screen
    let page = if page.requires_session() && !signed_in {
        Page::Login
    } else {
        page
    };

    rsx! {
        div {
            class: "app-shell",

            if page.requires_session() {
                Toolbar {}
                div {
                    class: "app-body",
                    Sidebar { active: page }
                    main {
                        class: "app-main",
                        PageContent { page }
                    }
                }
                StatusBar {}
            } else {
                PageContent { page }
            }

            if let Some(dialog) = dialog {
                DialogOverlay { dialog }
            }
        }
    }
}

/// Render the active page
#[component]
fn PageContent(page: Page) -> Element {
    match page {
        Page::Login => rsx! { LoginPage {} },
        Page::Register => rsx! { RegisterPage {} },
        Page::Dashboard => rsx! { DashboardPage {} },
        Page::Entity(kind) => rsx! { EntityTablePage { kind } },
        Page::Storefront => rsx! { StorefrontPage {} },
    }
}

// ============================================================================
// Toolbar
// ============================================================================

#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let user_name = state
        .session()
        .map(|s| s.name.clone())
        .unwrap_or_default();
    let cart_count = state.cart.total_items();
    drop(state);

    rsx! {
        header {
            class: "toolbar",

            button {
                class: "btn btn-icon",
                title: "Toggle sidebar",
                onclick: move |_| APP_STATE.write().ui.toggle_sidebar(),
                "☰"
            }

            span { class: "toolbar-title", "☕ Café Code Console" }

            div { class: "toolbar-spacer" }

            button {
                class: "btn btn-icon toolbar-cart",
                title: "Cart",
                onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::Cart),
                "🛒"
                if cart_count > 0 {
                    span { class: "cart-badge", "{cart_count}" }
                }
            }

            button {
                class: "btn btn-icon",
                title: "Profile",
                onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::Profile),
                "👤 {user_name}"
            }
        }
    }
}

// ============================================================================
// Sidebar
// ============================================================================

#[component]
fn Sidebar(active: Page) -> Element {
    let collapsed = APP_STATE.read().ui.sidebar_collapsed;

    rsx! {
        nav {
            class: if collapsed { "sidebar sidebar-collapsed" } else { "sidebar" },

            for item in Page::nav_items() {
                button {
                    key: "{item.display_name()}",
                    class: if item == active { "nav-item nav-item-active" } else { "nav-item" },
                    onclick: move |_| APP_STATE.write().ui.navigate(item),
                    span { class: "nav-icon", "{item.icon()}" }
                    if !collapsed {
                        span { class: "nav-label", "{item.display_name()}" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

#[component]
fn StatusBar() -> Element {
    let message = APP_STATE.read().ui.status_message.clone();
    let message_class = message
        .as_ref()
        .map(|s| status_class(s.level))
        .unwrap_or("status-text");
    let version = crate::VERSION;

    rsx! {
        footer {
            class: "status-bar",

            if let Some(status) = message {
                span {
                    class: "{message_class}",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "{status.text}"
                }
            } else {
                span { class: "status-text", "Ready" }
            }

            div { class: "toolbar-spacer" }
            span { class: "status-version", "v{version}" }
        }
    }
}

fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "status-text status-info",
        StatusLevel::Success => "status-text status-success",
        StatusLevel::Warning => "status-text status-warning",
        StatusLevel::Error => "status-text status-error",
    }
}

// ============================================================================
// Dialog Overlay
// ============================================================================

#[component]
fn DialogOverlay(dialog: Dialog) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| APP_STATE.write().ui.close_dialog(),

            div {
                class: "dialog-panel",
                onclick: move |e| e.stop_propagation(),

                match dialog.clone() {
                    Dialog::NewRecord(kind) => rsx! {
                        RecordFormDialog { kind }
                    },
                    Dialog::EditRecord(kind, id) => rsx! {
                        RecordFormDialog { kind, existing_id: Some(id) }
                    },
                    Dialog::ConfirmDelete { kind, id, label } => rsx! {
                        ConfirmDeleteDialog { kind, id, label }
                    },
                    Dialog::Cart => rsx! { CartDialog {} },
                    Dialog::Receipt(receipt) => rsx! { ReceiptDialog { receipt } },
                    Dialog::Profile => rsx! { ProfileDialog {} },
                    Dialog::Error(message) => rsx! {
                        div {
                            class: "error-dialog",
                            h2 { class: "dialog-title dialog-title-danger", "Something went wrong" }
                            p { class: "dialog-message", "{message}" }
                            div {
                                class: "dialog-actions",
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                                    "Close"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_per_level() {
        assert!(status_class(StatusLevel::Error).contains("status-error"));
        assert!(status_class(StatusLevel::Success).contains("status-success"));
        assert!(status_class(StatusLevel::Info).contains("status-info"));
        assert!(status_class(StatusLevel::Warning).contains("status-warning"));
    }
}
