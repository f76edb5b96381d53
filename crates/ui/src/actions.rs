//! Async glue between the UI and the client crate
//!
//! Every handler here follows the same shape: capture what the request
//! needs under the signal lock, run it without holding the signal, then
//! write the outcome back and set a status message. List loads are issued
//! and landed on the shared controller, so an overlapping reload can
//! never put stale rows on screen and never clobbers edits made while it
//! was in flight. Components call these from `spawn(async move { .. })`
//! in their event handlers.

use cafe_client::{EntityListController, ProductGroup, SalesPeriod};
use cafe_core::ConsoleResult;
use cafe_schema::{EntityKind, EntityRecord, RecordDraft};
use chrono::Utc;

use crate::state::{APP_STATE, Dialog, StatusLevel};

// ============================================================================
// Entity lists
// ============================================================================

fn with_controller<T>(kind: EntityKind, f: impl FnOnce(&mut EntityListController) -> T) -> T {
    let mut state = APP_STATE.write();
    let controller = state
        .controllers
        .get_mut(&kind)
        .expect("every kind has a controller");
    f(controller)
}

/// Reload one entity list from its store
pub async fn reload(kind: EntityKind) {
    let pending = with_controller(kind, |c| c.start_load());
    let outcome = pending.run().await;
    let result = with_controller(kind, |c| c.finish_load(outcome));

    if let Err(e) = result {
        APP_STATE
            .write()
            .ui
            .set_status(e.user_message(), StatusLevel::Error);
    }
}

/// Insert or edit a record, then reload its list
///
/// On success the active dialog closes and the status bar reports the
/// change; the caller surfaces the error otherwise (validation messages
/// belong next to the form fields).
pub async fn save_record(
    kind: EntityKind,
    existing_id: Option<String>,
    draft: RecordDraft,
) -> ConsoleResult<()> {
    let verb = if existing_id.is_some() { "updated" } else { "added" };
    let pending = with_controller(kind, |c| match &existing_id {
        Some(id) => c.prepare_edit(id, &draft),
        None => c.prepare_insert(&draft),
    })?;
    pending.run().await?;

    {
        let mut state = APP_STATE.write();
        state.ui.close_dialog();
        state.ui.set_status(
            format!("{} {}", kind.display_name(), verb),
            StatusLevel::Success,
        );
    }
    reload(kind).await;
    Ok(())
}

/// Delete a record after the user confirmed, then reload its list
pub async fn delete_record(kind: EntityKind, id: String) {
    let pending = with_controller(kind, |c| c.prepare_delete(&id));
    let result = pending.run().await;

    {
        let mut state = APP_STATE.write();
        state.ui.close_dialog();
        match &result {
            Ok(()) => state.ui.set_status(
                format!("{} deleted", kind.display_name()),
                StatusLevel::Success,
            ),
            Err(e) => state.ui.set_status(e.user_message(), StatusLevel::Error),
        }
    }
    if result.is_ok() {
        reload(kind).await;
    }
}

/// Update one list's search query; server-search deployments get a reload
pub async fn search(kind: EntityKind, query: String) {
    let server_search = with_controller(kind, |c| {
        c.set_query(query);
        c.uses_server_search()
    });
    if server_search {
        reload(kind).await;
    }
}

/// Switch the product group and reload the group-scoped lists
pub async fn switch_product_group(group: ProductGroup) {
    APP_STATE.write().set_product_group(group);
    reload(EntityKind::Category).await;
    reload(EntityKind::Product).await;
}

// ============================================================================
// Session
// ============================================================================

/// Sign in and enter the console
pub async fn login(email: String, password: String) -> ConsoleResult<()> {
    let mut gate = APP_STATE.read().gate.clone();
    let result = gate.login(&email, &password).await;

    let mut state = APP_STATE.write();
    state.gate = gate;
    if let Ok(session) = &result {
        let name = session.name.clone();
        state.enter();
        state
            .ui
            .set_status(format!("Welcome back, {}", name), StatusLevel::Success);
    }
    result.map(|_| ())
}

/// Register an account and enter the console
pub async fn register(
    id: String,
    name: String,
    email: String,
    password: String,
    phone: String,
) -> ConsoleResult<()> {
    let mut gate = APP_STATE.read().gate.clone();
    let result = gate.register(&id, &name, &email, &password, &phone).await;

    let mut state = APP_STATE.write();
    state.gate = gate;
    if let Ok(session) = &result {
        let name = session.name.clone();
        state.enter();
        state
            .ui
            .set_status(format!("Welcome, {}", name), StatusLevel::Success);
    }
    result.map(|_| ())
}

/// Sign out and return to the login page
pub fn logout() {
    let mut state = APP_STATE.write();
    if let Err(e) = state.gate.logout() {
        tracing::warn!(error = %e, "failed to clear stored identity");
    }
    state.leave();
}

// ============================================================================
// Cart
// ============================================================================

fn persist_cart() {
    let state = APP_STATE.read();
    if let Err(e) = state.cart.save(&state.local) {
        tracing::warn!(error = %e, "failed to persist cart");
    }
}

/// Add a product row to the cart
pub fn add_to_cart(product: &EntityRecord) {
    let item = {
        let state = APP_STATE.read();
        let schema = state.controller(EntityKind::Product).schema().clone();
        cafe_client::CartItem::from_product(&schema, product)
    };

    let Some(item) = item else {
        APP_STATE
            .write()
            .ui
            .set_status("Product has no identity", StatusLevel::Error);
        return;
    };

    let name = item.name.clone();
    APP_STATE.write().cart.add(item);
    persist_cart();
    APP_STATE
        .write()
        .ui
        .set_status(format!("{} added to cart", name), StatusLevel::Success);
}

/// Bump a cart line's quantity
pub fn cart_increase(product_id: &str) {
    APP_STATE.write().cart.increase(product_id);
    persist_cart();
}

/// Step a cart line's quantity down
pub fn cart_decrease(product_id: &str) {
    APP_STATE.write().cart.decrease(product_id);
    persist_cart();
}

/// Remove a cart line
pub fn cart_remove(product_id: &str) {
    APP_STATE.write().cart.remove(product_id);
    persist_cart();
}

/// Complete the purchase and show the receipt
///
/// The confirm step happens in the cart dialog before this runs.
pub fn checkout() {
    let result = APP_STATE.write().cart.checkout(Utc::now());
    match result {
        Ok(receipt) => {
            persist_cart();
            let mut state = APP_STATE.write();
            state.ui.show_dialog(Dialog::Receipt(receipt));
            state
                .ui
                .set_status("Checkout completed successfully", StatusLevel::Success);
        }
        Err(e) => {
            APP_STATE
                .write()
                .ui
                .set_status(e.user_message(), StatusLevel::Error);
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Change the dashboard aggregation window
pub fn set_sales_period(period: SalesPeriod) {
    APP_STATE.write().sales_period = period;
}
