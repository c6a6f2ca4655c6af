//! Menu page: catalog fetch, category tabs, product grid, cart surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetch-on-mount with no retry: a failed catalog load replaces the content
//! region with a static message (diagnostics go to the console). The
//! exchange rate is fetched alongside; a failure there silently keeps the
//! fallback rate.

#[cfg(test)]
#[path = "menu_page_test.rs"]
mod menu_page_test;

use leptos::prelude::*;

use crate::components::cart_drawer::CartDrawer;
use crate::components::category_tabs::CategoryTabs;
use crate::components::floating_cart::FloatingCart;
use crate::components::product_grid::ProductGrid;
use crate::components::spinner::LoadingSpinner;
use crate::state::menu::{ExchangeState, MenuState};
use crate::util::money::format_lbp;

/// User-visible message when the catalog fetch fails.
const MENU_FETCH_FAILED: &str = "Failed to load menu items";

/// Kick off the one-shot catalog fetch. Browser-only.
fn load_menu(menu: RwSignal<MenuState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_menu_products().await {
                Ok(products) => menu.set(MenuState::loaded(products)),
                Err(err) => {
                    log::error!("menu fetch failed: {err}");
                    menu.set(MenuState::failed(MENU_FETCH_FAILED.to_owned()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = menu;
    }
}

/// Kick off the one-shot exchange rate fetch. Browser-only; a failure keeps
/// the fallback rate with no user-visible error.
fn load_exchange_rate(exchange: RwSignal<ExchangeState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_exchange_rate().await {
                Ok(rate) => exchange.set(ExchangeState { rate: rate.rate, loading: false }),
                Err(err) => {
                    log::error!("exchange rate fetch failed: {err}");
                    exchange.update(|e| e.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = exchange;
    }
}

/// Rate line under the menu title, e.g. `1 USD = 89,500 LBP`.
#[allow(clippy::cast_possible_truncation)]
fn rate_line(rate: f64) -> String {
    format!("1 USD = {} LBP", format_lbp(rate.round() as i64))
}

/// The menu route.
#[component]
pub fn MenuPage() -> impl IntoView {
    let menu = RwSignal::new(MenuState::loading());
    let exchange = RwSignal::new(ExchangeState::default());
    provide_context(menu);

    load_menu(menu);
    load_exchange_rate(exchange);

    view! {
        <div class="menu-page">
            <Show
                when=move || !menu.get().loading
                fallback=|| view! { <LoadingSpinner/> }
            >
                <Show
                    when=move || menu.get().error.is_none()
                    fallback=move || {
                        view! {
                            <p class="menu-page__error">
                                {move || menu.get().error.unwrap_or_default()}
                            </p>
                        }
                    }
                >
                    <header class="menu-page__header">
                        <span class="menu-page__icon">"🍽"</span>
                        <h1 class="menu-page__title">"Our Menu"</h1>
                        <p class="menu-page__rate">{move || rate_line(exchange.get().rate)}</p>
                    </header>

                    <CategoryTabs/>
                    <ProductGrid/>
                </Show>
            </Show>

            <FloatingCart/>
            <CartDrawer/>
        </div>
    }
}
