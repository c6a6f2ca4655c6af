//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::pages::{landing::LandingPage, menu::MenuPage, stations::StationsPage};
use crate::state::{cart::CartState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared cart and UI state contexts and sets up routing.
/// The cart lives here — not in any page — so it survives navigation
/// between the menu and other routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::new());
    let ui = RwSignal::new(UiState::default());

    provide_context(cart);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/epiclounge.css"/>
        <Title text="Epic Lounge"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route path=StaticSegment("stations") view=StationsPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
