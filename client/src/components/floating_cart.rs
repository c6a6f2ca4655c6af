//! Floating cart button with a total-quantity badge.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::ui::UiState;

/// Fixed-position cart trigger. The badge shows the sum of quantities
/// across all line items, not the number of distinct products.
#[component]
pub fn FloatingCart() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let total_items = move || cart.get().total_items();

    view! {
        <button
            class="floating-cart"
            on:click=move |_| ui.update(|u| u.cart_open = true)
            title="Open cart"
            aria-label="Open cart"
        >
            <span class="floating-cart__icon">"🛒"</span>
            <Show when=move || { total_items() > 0 }>
                <span class="floating-cart__badge">{total_items}</span>
            </Show>
        </button>
    }
}
