//! Slide-in cart drawer with quantity controls and checkout.
//!
//! ARCHITECTURE
//! ============
//! The drawer is the only place the checkout side effect happens: it builds
//! the order message and deep link with the pure helpers in `util::order`,
//! opens the link in a new browsing context, then resets the cart and form
//! fields unconditionally. Delivery of the message is never confirmed.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::ui::UiState;
use crate::util::money::{format_lbp, format_usd};
use crate::util::order::{build_order_message, checkout_url};

/// Open the checkout link in a new browsing context. Browser-only; the SSR
/// path is a no-op since checkout can only be triggered by a click.
fn open_checkout_link(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                log::error!("failed to open checkout link: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Right-hand cart drawer. Hidden until [`UiState::cart_open`] is set.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_| ui.update(|u| u.cart_open = false);

    let on_checkout = move |_| {
        let state = cart.get();
        if state.is_empty() {
            return;
        }
        let message = build_order_message(
            state.items(),
            state.total_price(),
            &state.customer_name,
            &state.customer_notes,
        );
        open_checkout_link(&checkout_url(&message));
        cart.update(CartState::reset_after_checkout);
        ui.update(|u| u.cart_open = false);
    };

    let items = move || cart.get().items().to_vec();
    let totals = move || cart.get().total_price();

    view! {
        <Show when=move || ui.get().cart_open>
            <div class="cart-drawer__backdrop" on:click=close></div>
            <aside class="cart-drawer">
                <div class="cart-drawer__header">
                    <span class="cart-drawer__title">"Your Cart"</span>
                    <button class="cart-drawer__close" on:click=close aria-label="Close cart">
                        "✕"
                    </button>
                </div>

                <div class="cart-drawer__items">
                    <Show
                        when=move || !cart.get().is_empty()
                        fallback=|| {
                            view! {
                                <div class="cart-drawer__empty">
                                    <p>"Your cart is empty"</p>
                                    <p class="cart-drawer__empty-hint">
                                        "Add items from the menu to get started!"
                                    </p>
                                </div>
                            }
                        }
                    >
                        <For each=items key=|item| (item.product.id.clone(), item.quantity) let:item>
                            {
                                let id = item.product.id.clone();
                                let decrement_id = id.clone();
                                let increment_id = id.clone();
                                let remove_id = id.clone();
                                let quantity = i64::from(item.quantity);
                                let unit = item.product.pricing.clone();
                                view! {
                                    <div class="cart-drawer__item">
                                        <div class="cart-drawer__item-info">
                                            <span class="cart-drawer__item-name">
                                                {item.product.name.clone()}
                                            </span>
                                            <span class="cart-drawer__item-category">
                                                {item.product.category.name.clone()}
                                            </span>
                                            <span class="cart-drawer__item-price">
                                                {format_usd(unit.usd)} " / "
                                                {format_lbp(unit.lbp)} " LBP"
                                            </span>
                                        </div>
                                        <div class="cart-drawer__item-controls">
                                            <button
                                                class="cart-drawer__qty-button"
                                                on:click=move |_| {
                                                    cart.update(|c| {
                                                        c.update_quantity(&decrement_id, quantity - 1);
                                                    });
                                                }
                                                aria-label="Decrease quantity"
                                            >
                                                "−"
                                            </button>
                                            <span class="cart-drawer__qty">{item.quantity}</span>
                                            <button
                                                class="cart-drawer__qty-button"
                                                on:click=move |_| {
                                                    cart.update(|c| {
                                                        c.update_quantity(&increment_id, quantity + 1);
                                                    });
                                                }
                                                aria-label="Increase quantity"
                                            >
                                                "+"
                                            </button>
                                            <button
                                                class="cart-drawer__remove"
                                                on:click=move |_| {
                                                    cart.update(|c| c.remove_item(&remove_id));
                                                }
                                                aria-label="Remove item"
                                            >
                                                "🗑"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        </For>
                    </Show>
                </div>

                <div class="cart-drawer__checkout">
                    <label class="cart-drawer__field">
                        "Name (optional)"
                        <input
                            type="text"
                            prop:value=move || cart.get().customer_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                cart.update(|c| c.customer_name = value);
                            }
                        />
                    </label>
                    <label class="cart-drawer__field">
                        "Notes (optional)"
                        <textarea
                            prop:value=move || cart.get().customer_notes
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                cart.update(|c| c.customer_notes = value);
                            }
                        ></textarea>
                    </label>

                    <div class="cart-drawer__totals">
                        <span class="cart-drawer__totals-label">"Total"</span>
                        <span class="cart-drawer__totals-usd">{move || format_usd(totals().usd)}</span>
                        <span class="cart-drawer__totals-lbp">
                            {move || format_lbp(totals().lbp)} " LBP"
                        </span>
                    </div>

                    <button
                        class="cart-drawer__checkout-button"
                        disabled=move || cart.get().is_empty()
                        on:click=on_checkout
                    >
                        "Checkout via WhatsApp"
                    </button>
                </div>
            </aside>
        </Show>
    }
}
