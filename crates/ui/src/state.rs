//! Application state management for the Café Code console
//!
//! Centralized state using Dioxus 0.7 signals: the signed-in session, one
//! list controller per entity screen, the storefront cart, and the UI
//! chrome state (page, dialog, status bar). Components read through
//! `APP_STATE`; actions capture requests under the lock, run them without
//! holding it, and land the results back on the shared controllers.

use cafe_client::{
    AccountSource, Cart, EntityListController, Endpoints, HttpStore, LocalStore, MemoryStore,
    ProductGroup, RetryPolicy, SalesPeriod, Session, SessionGate, StoreHandle,
};
use cafe_schema::{Backend, EntityKind};
use dioxus::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Sign-in page
    #[default]
    Login,
    /// Account registration page
    Register,
    /// Sales dashboard
    Dashboard,
    /// One entity's management table
    Entity(EntityKind),
    /// Customer-facing product storefront
    Storefront,
}

impl Page {
    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::Entity(kind) => kind.plural_name(),
            Page::Storefront => "Storefront",
        }
    }

    /// Get the icon emoji for this page
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Login => "🔑",
            Page::Register => "📝",
            Page::Dashboard => "📊",
            Page::Entity(EntityKind::Brand) => "🏷️",
            Page::Entity(EntityKind::Category) => "🗂️",
            Page::Entity(EntityKind::Customer) => "🧑",
            Page::Entity(EntityKind::Employee) => "🧑‍🍳",
            Page::Entity(EntityKind::Product) => "☕",
            Page::Entity(EntityKind::User) => "👥",
            Page::Entity(EntityKind::Role) => "🛡️",
            Page::Entity(EntityKind::TeamMember) => "🤝",
            Page::Storefront => "🛒",
        }
    }

    /// Check if this page requires a signed-in session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }

    /// Sidebar order for the signed-in pages
    pub fn nav_items() -> Vec<Page> {
        let mut items = vec![Page::Dashboard];
        items.extend(EntityKind::all().iter().map(|k| Page::Entity(*k)));
        items.push(Page::Storefront);
        items
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (page, dialogs, status bar)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Currently active page
    pub active_page: Page,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            active_page: Page::Login,
            active_dialog: None,
            status_message: None,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Show a dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Add a record of a kind
    NewRecord(EntityKind),
    /// Edit an existing record by identity
    EditRecord(EntityKind, String),
    /// Delete confirmation; label names the record for the prompt
    ConfirmDelete {
        kind: EntityKind,
        id: String,
        label: String,
    },
    /// Cart contents and checkout
    Cart,
    /// Checkout receipt text
    Receipt(String),
    /// Signed-in profile
    Profile,
    /// Error dialog
    Error(String),
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// Endpoint registry the remote controllers are built from
    pub endpoints: Endpoints,
    /// Shared store for the demo-backed entities
    pub memory: MemoryStore,
    /// Persistent local store (identity, cart)
    pub local: LocalStore,
    /// Login/registration and the signed-in identity
    pub gate: SessionGate,
    /// One list controller per entity kind
    pub controllers: HashMap<EntityKind, EntityListController>,
    /// Active product group (selects category/product endpoints)
    pub product_group: ProductGroup,
    /// Storefront cart
    pub cart: Cart,
    /// Dashboard aggregation window
    pub sales_period: SalesPeriod,
    /// UI state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create the initial state, restoring session and cart from disk
    pub fn new() -> Self {
        let endpoints = Endpoints::default();
        let memory = MemoryStore::with_demo_data();
        let local = open_local_store();
        let gate = SessionGate::new(
            AccountSource::Http(HttpStore::new(endpoints.accounts().clone())),
            local.clone(),
        );
        let cart = Cart::load(&local);
        let group = ProductGroup::default();

        let mut state = Self {
            controllers: build_controllers(&endpoints, &memory, group),
            product_group: group,
            cart,
            sales_period: SalesPeriod::default(),
            ui: UiState::new(),
            endpoints,
            memory,
            local,
            gate,
        };
        if state.gate.is_signed_in() {
            state.ui.navigate(Page::Dashboard);
        }
        state
    }

    /// The signed-in session, if any
    pub fn session(&self) -> Option<&Session> {
        self.gate.current()
    }

    /// The controller for one entity kind
    pub fn controller(&self, kind: EntityKind) -> &EntityListController {
        &self.controllers[&kind]
    }

    /// Switch the active product group, rebinding the group-scoped
    /// controllers to the group's endpoints
    pub fn set_product_group(&mut self, group: ProductGroup) {
        self.product_group = group;
        for kind in [EntityKind::Category, EntityKind::Product] {
            self.controllers
                .insert(kind, remote_controller(&self.endpoints, kind, group));
        }
    }

    /// Navigate to the page that follows a successful sign-in
    pub fn enter(&mut self) {
        self.ui.navigate(Page::Dashboard);
    }

    /// Drop back to the login page after sign-out
    pub fn leave(&mut self) {
        self.ui.navigate(Page::Login);
        self.ui.close_dialog();
        self.ui.clear_status();
    }
}

fn build_controllers(
    endpoints: &Endpoints,
    memory: &MemoryStore,
    group: ProductGroup,
) -> HashMap<EntityKind, EntityListController> {
    EntityKind::all()
        .iter()
        .map(|kind| {
            let controller = match kind.backend() {
                Backend::Memory => {
                    EntityListController::new(*kind, StoreHandle::Memory(memory.clone()))
                }
                Backend::Remote => remote_controller(endpoints, *kind, group),
            };
            (*kind, controller)
        })
        .collect()
}

fn remote_controller(
    endpoints: &Endpoints,
    kind: EntityKind,
    group: ProductGroup,
) -> EntityListController {
    // The registry covers every remote kind, so resolution cannot fail here
    let config = endpoints
        .resolve(kind, Some(group))
        .unwrap_or_else(|_| endpoints.brands().clone());
    let retry = if kind == EntityKind::Product {
        RetryPolicy::product_reads()
    } else {
        RetryPolicy::none()
    };
    EntityListController::new(kind, StoreHandle::Http(HttpStore::new(config).with_retry(retry)))
}

/// Open the persistent store, falling back to a temp directory when the
/// working directory is not writable
fn open_local_store() -> LocalStore {
    LocalStore::open_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to temp dir for local store");
        LocalStore::open(std::env::temp_dir().join("cafe-console"))
            .expect("temp dir must be writable")
    })
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Initialize the global app state
/// Call this once at app startup
pub fn init_app_state() {
    // State is initialized with defaults via Signal::global
}

// ============================================================================
// Tests
// ============================================================================
