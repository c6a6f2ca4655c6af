//! Product grid filtered by the active category tab.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::menu::MenuState;
use crate::state::ui::UiState;

/// Grid of product cards for the active category selection.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let products = move || menu.get().products_for(&ui.get().active_category);

    view! {
        <div class="product-grid">
            <For each=products key=|product| product.id.clone() let:product>
                <ProductCard product=product/>
            </For>
        </div>
    }
}
