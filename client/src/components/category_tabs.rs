//! Category filter tabs for the menu page.

use leptos::prelude::*;

use crate::state::menu::{ALL_CATEGORIES, MenuState};
use crate::state::ui::UiState;

/// Sticky tab strip: an "All" tab plus one tab per catalog category, each
/// showing its product count. The active tab lives in [`UiState`].
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tabs = move || {
        let state = menu.get();
        let mut tabs = vec![(ALL_CATEGORIES.to_owned(), "All".to_owned(), state.total_products())];
        tabs.extend(
            state
                .groups
                .iter()
                .map(|g| (g.category.id.clone(), g.category.name.clone(), g.products.len())),
        );
        tabs
    };

    view! {
        <div class="category-tabs">
            <For each=tabs key=|(id, _, count)| (id.clone(), *count) let:tab>
                {
                    let (id, name, count) = tab;
                    let tab_id = id.clone();
                    let is_active = move || ui.get().active_category == tab_id;
                    let select_id = id.clone();
                    view! {
                        <button
                            class="category-tabs__tab"
                            class:category-tabs__tab--active=is_active
                            on:click=move |_| {
                                let id = select_id.clone();
                                ui.update(|u| u.active_category = id);
                            }
                        >
                            <span class="category-tabs__name">{name}</span>
                            <span class="category-tabs__count">{count}</span>
                        </button>
                    }
                }
            </For>
        </div>
    }
}
