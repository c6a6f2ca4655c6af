//! Detail overlay for a clicked station.
//!
//! Shows the status snapshot taken at click time; a later poll does not
//! rewrite an open overlay.

use leptos::prelude::*;

use crate::net::types::StationState;
use crate::state::stations::StationsState;

fn status_class(state: StationState) -> &'static str {
    match state {
        StationState::Available => "station-detail--available",
        StationState::Occupied => "station-detail--occupied",
        StationState::Maintenance => "station-detail--maintenance",
    }
}

fn status_label(state: StationState) -> &'static str {
    match state {
        StationState::Available => "AVAILABLE",
        StationState::Occupied => "OCCUPIED",
        StationState::Maintenance => "MAINTENANCE",
    }
}

/// Modal overlay with the chosen station's name, status, and location.
/// Clicking the backdrop closes it.
#[component]
pub fn StationDetail() -> impl IntoView {
    let stations = expect_context::<RwSignal<StationsState>>();

    let close = move |_| stations.update(|s| s.selected = None);

    view! {
        <Show when=move || stations.get().selected.is_some()>
            {move || {
                stations
                    .get()
                    .selected
                    .map(|station| {
                        let location = station.location.clone().unwrap_or_default();
                        let has_location = !location.is_empty();
                        view! {
                            <div class="station-detail__backdrop" on:click=close>
                                <div
                                    class=format!(
                                        "station-detail {}",
                                        status_class(station.status),
                                    )
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <h2 class="station-detail__name">{station.name.clone()}</h2>
                                    <p class="station-detail__status">
                                        "Status: "
                                        <span class="station-detail__status-value">
                                            {status_label(station.status)}
                                        </span>
                                    </p>
                                    <Show when=move || has_location>
                                        <p class="station-detail__location">
                                            "Location: " {location.clone()}
                                        </p>
                                    </Show>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
