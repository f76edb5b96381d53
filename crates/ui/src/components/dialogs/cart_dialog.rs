//! # Cart Dialog
//!
//! The storefront cart: one row per product with quantity controls, a
//! running subtotal, and the checkout button. Checkout confirms before
//! clearing the cart and then shows the receipt.

use cafe_client::format_usd;
use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

// ============================================================================
// Cart Dialog
// ============================================================================

/// Cart contents with quantity controls and checkout
#[component]
pub fn CartDialog() -> Element {
    let state = APP_STATE.read();
    let items = state.cart.items().to_vec();
    let subtotal = format_usd(state.cart.subtotal());
    drop(state);

    rsx! {
        div {
            class: "cart-dialog",

            h2 { class: "dialog-title", "Your Cart" }

            if items.is_empty() {
                p { class: "cart-empty", "Your cart is empty" }
            } else {
                div {
                    class: "cart-lines",

                    for item in items.iter() {
                        {
                        let unit_price = format_usd(item.price);
                        let line_total = format_usd(item.line_total());
                        rsx! {
                        div {
                            key: "{item.product_id}",
                            class: "cart-line",


                            if !item.image_url.is_empty() {
                                img {
                                    class: "cart-line-image",
                                    src: "{item.image_url}",
                                    alt: "{item.name}",
                                }
                            }

                            div {
                                class: "cart-line-info",
                                span { class: "cart-line-name", "{item.name}" }
                                span { class: "cart-line-price", "{unit_price}" }
                            }

                            div {
                                class: "cart-line-controls",
                                button {
                                    class: "btn btn-quantity",
                                    onclick: {
                                        let id = item.product_id.clone();
                                        move |_| actions::cart_decrease(&id)
                                    },
                                    "−"
                                }
                                span { class: "cart-line-quantity", "{item.quantity}" }
                                button {
                                    class: "btn btn-quantity",
                                    onclick: {
                                        let id = item.product_id.clone();
                                        move |_| actions::cart_increase(&id)
                                    },
                                    "+"
                                }
                                button {
                                    class: "btn btn-remove",
                                    onclick: {
                                        let id = item.product_id.clone();
                                        move |_| actions::cart_remove(&id)
                                    },
                                    "✕"
                                }
                            }

                            span {
                                class: "cart-line-total",
                                "{line_total}"
                            }
                        }
                        }
                        }
                    }
                }

                div {
                    class: "cart-subtotal",
                    span { "Subtotal" }
                    span { class: "cart-subtotal-amount", "{subtotal}" }
                }
            }

            div {
                class: "dialog-actions",

                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Continue Shopping"
                }

                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: items.is_empty(),
                    onclick: move |_| actions::checkout(),
                    "Checkout"
                }
            }
        }
    }
}

// ============================================================================
// Receipt Dialog
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ReceiptDialogProps {
    /// Rendered receipt text
    pub receipt: String,
}

/// Plain-text receipt shown after a successful checkout
#[component]
pub fn ReceiptDialog(props: ReceiptDialogProps) -> Element {
    rsx! {
        div {
            class: "receipt-dialog",

            h2 { class: "dialog-title", "Order Complete" }

            pre { class: "receipt-text", "{props.receipt}" }

            div {
                class: "dialog-actions",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "Done"
                }
            }
        }
    }
}
