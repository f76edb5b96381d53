//! # Café UI
//!
//! Dioxus Desktop UI for the Café Code console.
//!
//! This crate provides the admin screens, sales dashboard, and product
//! storefront on top of the `cafe_client` stores and controllers.
//!
//! ## Features
//!
//! - Schema-driven management tables for every entity
//! - Sales dashboard with summary cards and charts
//! - Product storefront with a persistent cart
//! - Session gate with login, registration, and sign-out
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use cafe_client;
pub use cafe_schema;

// Re-export main components
pub use app::App;
pub use pages::{DashboardPage, EntityTablePage, LoginPage, RegisterPage, StorefrontPage};
pub use state::{
    APP_STATE, AppState, Dialog, Page, StatusLevel, StatusMessage, UiState, init_app_state,
};

// Re-export components
pub use components::{
    CartDialog, ConfirmDeleteDialog, ProfileDialog, ReceiptDialog, RecordFormDialog, Select,
    SelectOption, TextArea, TextInput,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Café Code";

/// Application display title
pub const TITLE: &str = "Café Code - Management Console";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Café Code desktop application
///
/// This is the main entry point for the Dioxus desktop app.
/// It initializes the application state and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     cafe_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Initialize application state
    init_app_state();

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(960.0, 640.0)),
                )
                .with_menu(None) // No default menu; the toolbar carries the actions
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Café Code");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Café Code"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".app-shell"));
    }
}
