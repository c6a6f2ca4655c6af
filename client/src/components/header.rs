//! Site header with primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed top navigation bar shared by every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A attr:class="site-header__brand" href="/">
                "EPIC LOUNGE"
            </A>
            <nav class="site-header__nav">
                <A attr:class="site-header__link" href="/">
                    "Home"
                </A>
                <A attr:class="site-header__link" href="/menu">
                    "Menu"
                </A>
                <A attr:class="site-header__link" href="/stations">
                    "Stations"
                </A>
            </nav>
        </header>
    }
}
