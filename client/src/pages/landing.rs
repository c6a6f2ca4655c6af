//! Landing page: hero, features, about, location, and call-to-action.
//!
//! Entirely static content — the only route with no fetches.

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str, &str); 6] = [
    ("🎮", "Premium Gaming Setup", "High-end PCs with RTX 4090 graphics cards"),
    ("🪑", "Comfortable Space", "Ergonomic gaming chairs and spacious stations"),
    ("⚡", "Fast Internet", "Ultra-low latency fiber connection"),
    ("🍕", "Food & Drinks", "Wide selection of snacks and beverages"),
    ("🏆", "Tournaments", "Regular gaming competitions with prizes"),
    ("🚪", "Private Rooms", "Book exclusive rooms for your squad"),
];

const STATS: [(&str, &str); 4] = [
    ("50+", "Tournaments Hosted"),
    ("5000+", "Happy Gamers"),
    ("24/7", "Gaming Sessions"),
    ("4.9", "Average Rating"),
];

const MAPS_URL: &str = "https://maps.google.com/?q=Sawfar+badghan+main+road+near+habibi+cut";

/// The public landing route.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="hero">
                <span class="hero__brand">"EPIC LOUNGE"</span>
                <h1 class="hero__title">"GAMER'S HEAVEN"</h1>
                <p class="hero__subtitle">"The Ultimate Gaming Experience in Lebanon"</p>
                <p class="hero__description">
                    "Premium Gaming PCs • PS5 Rooms • Billiards • Foosball • Chess Lounge • Live Football Matches • Coffee & Snacks"
                </p>
                <div class="hero__actions">
                    <A attr:class="hero__cta hero__cta--primary" href="/menu">
                        "Explore the Menu"
                    </A>
                    <A attr:class="hero__cta hero__cta--secondary" href="/stations">
                        "Live Station Status"
                    </A>
                </div>
            </section>

            <section class="features">
                <h2 class="features__title">"Why Epic Lounge"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="features__card">
                                    <span class="features__icon">{*icon}</span>
                                    <h3 class="features__name">{*title}</h3>
                                    <p class="features__description">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about">
                <h2 class="about__title">"About Epic Lounge"</h2>
                <p class="about__text">
                    "Lebanon's premier gaming destination where passion meets play. "
                    "Founded by gamers, for gamers, we've created the space we always "
                    "wanted — from CS 1.6 LAN nights to FIFA tournaments on the big screen."
                </p>
                <p class="about__text">
                    "With state-of-the-art equipment, lightning-fast internet, and a "
                    "community that never logs off, our mission is simple: provide the "
                    "best gaming experience in Lebanon."
                </p>
                <div class="about__stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="about__stat">
                                    <span class="about__stat-value">{*value}</span>
                                    <span class="about__stat-label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="location">
                <h2 class="location__title">"Find Us"</h2>
                <p class="location__address">"Sawfar, Badghan main road — Sidon, Lebanon"</p>
                <a class="location__maps" href=MAPS_URL target="_blank" rel="noreferrer">
                    "Open in Google Maps"
                </a>
            </section>

            <section class="cta">
                <h2 class="cta__title">"READY TO PLAY?"</h2>
                <A attr:class="cta__button" href="/menu">
                    "Order From the Menu"
                </A>
            </section>
        </div>
    }
}
