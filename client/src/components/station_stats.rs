//! Aggregate station counters above the floor map.

use leptos::prelude::*;

use crate::state::stations::StationsState;

/// Four stat cards: total, available, occupied, maintenance.
#[component]
pub fn StationStats() -> impl IntoView {
    let stations = expect_context::<RwSignal<StationsState>>();

    let stat = move |pick: fn(&crate::net::types::StationStats) -> u32| {
        stations.get().stats.map_or(0, |s| pick(&s))
    };

    view! {
        <div class="station-stats">
            <div class="station-stats__card">
                <span class="station-stats__value">{move || stat(|s| s.total)}</span>
                <span class="station-stats__label">"Total"</span>
            </div>
            <div class="station-stats__card station-stats__card--available">
                <span class="station-stats__value">{move || stat(|s| s.available)}</span>
                <span class="station-stats__label">"Available"</span>
            </div>
            <div class="station-stats__card station-stats__card--occupied">
                <span class="station-stats__value">{move || stat(|s| s.occupied)}</span>
                <span class="station-stats__label">"Occupied"</span>
            </div>
            <div class="station-stats__card station-stats__card--maintenance">
                <span class="station-stats__value">{move || stat(|s| s.maintenance)}</span>
                <span class="station-stats__label">"Maintenance"</span>
            </div>
        </div>
    }
}
