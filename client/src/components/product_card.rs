//! Menu product cards.
//!
//! Products with an image get a full media card; products without one get a
//! compact list-style row. Both variants show dual-currency pricing and an
//! add-to-cart button that mutates the shared cart state.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Product;
use crate::state::cart::CartState;
use crate::util::money::{format_lbp, format_usd};

/// One product in the menu grid.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let name = product.name.clone();
    let category = product.category.name.clone();
    let description = product.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();
    let image = product.image.clone().unwrap_or_default();
    let has_image = !image.is_empty();
    let usd = format_usd(product.pricing.usd);
    let lbp = format!("{} LBP", format_lbp(product.pricing.lbp));

    let on_add = move |_| {
        let product = product.clone();
        cart.update(|c| c.add_item(product));
    };

    if !has_image {
        return view! {
            <div class="product-card product-card--compact">
                <div class="product-card__body">
                    <span class="product-card__name">{name}</span>
                    <Show when=move || has_description>
                        <span class="product-card__description">{description.clone()}</span>
                    </Show>
                    <span class="product-card__price">
                        <span class="product-card__usd">{usd}</span>
                        <span class="product-card__lbp">{lbp}</span>
                    </span>
                </div>
                <button class="product-card__add" on:click=on_add title="Add to cart">
                    "+"
                </button>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="product-card">
            <img class="product-card__image" src=image alt=name.clone()/>
            <div class="product-card__body">
                <span class="product-card__name">{name}</span>
                <span class="product-card__category">{category}</span>
                <Show when=move || has_description>
                    <span class="product-card__description">{description.clone()}</span>
                </Show>
                <span class="product-card__price">
                    <span class="product-card__usd">{usd}</span>
                    <span class="product-card__lbp">{lbp}</span>
                </span>
            </div>
            <button class="product-card__add" on:click=on_add title="Add to cart">
                "+ Add"
            </button>
        </div>
    }
    .into_any()
}
