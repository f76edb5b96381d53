//! Page Components for the Café Code console
//!
//! Each page is one screen of the application:
//!
//! - **LoginPage** / **RegisterPage**: the session gate
//! - **DashboardPage**: sales summary and charts
//! - **EntityTablePage**: schema-driven management table for any entity
//! - **StorefrontPage**: customer-facing product grid with cart

pub mod dashboard;
pub mod entity_table;
pub mod login;
pub mod register;
pub mod storefront;

// Re-export page components for convenience
pub use dashboard::DashboardPage;
pub use entity_table::EntityTablePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use storefront::StorefrontPage;
