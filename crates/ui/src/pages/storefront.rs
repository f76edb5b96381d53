//! # Storefront Page
//!
//! Customer-facing product grid: group tabs across the top, one card per
//! product with image, description, and price, and an add-to-cart button
//! on every card.

use cafe_client::{ProductGroup, format_usd};
use cafe_schema::{EntityKind, EntityRecord};
use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

/// Product storefront page
#[component]
pub fn StorefrontPage() -> Element {
    use_effect(|| {
        spawn(actions::reload(EntityKind::Product));
    });

    let state = APP_STATE.read();
    let controller = state.controller(EntityKind::Product);
    let schema = controller.schema().clone();
    let products = controller.visible_records();
    let loading = controller.state().is_loading();
    let error = controller.state().error().map(str::to_string);
    let group = state.product_group;
    drop(state);

    rsx! {
        div {
            class: "storefront-page",

            div {
                class: "storefront-header",
                h1 { class: "page-title", "Storefront" }

                // Group tabs
                div {
                    class: "group-tabs",
                    for g in ProductGroup::all() {
                        button {
                            key: "{g.display_name()}",
                            class: if *g == group { "btn btn-tab btn-tab-active" } else { "btn btn-tab" },
                            onclick: {
                                let g = *g;
                                move |_| { spawn(actions::switch_product_group(g)); }
                            },
                            "{g.display_name()}"
                        }
                    }
                }
            }

            if products.is_empty() {
                if loading {
                    div { class: "table-placeholder", "Loading products..." }
                } else if let Some(message) = error {
                    div { class: "table-placeholder table-error", "{message}" }
                } else {
                    div { class: "table-placeholder", "No products in this category yet" }
                }
            } else {
                div {
                    class: "product-grid",
                    for product in products.iter() {
                        {
                            let id = product.id(&schema).unwrap_or_default();
                            rsx! {
                                ProductCard { key: "{id}", product: product.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Product Card
// ============================================================================

#[component]
fn ProductCard(product: EntityRecord) -> Element {
    let name = product.get_str("Name").unwrap_or_default();
    let description = product.get_str("Description").unwrap_or_default();
    let image_url = product.get_str("Image URL").unwrap_or_default();
    let price = format_usd(
        product
            .get_str("Price")
            .and_then(|p| p.parse::<f64>().ok())
            .unwrap_or(0.0),
    );

    let add = {
        let product = product.clone();
        move |_| actions::add_to_cart(&product)
    };

    rsx! {
        div {
            class: "product-card",

            if image_url.is_empty() {
                div { class: "product-image product-image-missing", "☕" }
            } else {
                img {
                    class: "product-image",
                    src: "{image_url}",
                    alt: "{name}",
                }
            }

            div {
                class: "product-body",
                h3 { class: "product-name", "{name}" }
                if !description.is_empty() {
                    p { class: "product-description", "{description}" }
                }
            }

            div {
                class: "product-footer",
                span { class: "product-price", "{price}" }
                button {
                    class: "btn btn-primary btn-small",
                    onclick: add,
                    "Add to Cart"
                }
            }
        }
    }
}
