//! Station status page: stats, live floor map, polling, manual refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status is re-fetched every 30 seconds while this page is mounted; the
//! poll stops on cleanup. Overlapping in-flight fetches are not deduplicated
//! — acceptable at this payload size. Unlike the catalog routes, this page
//! offers a manual refresh.

#[cfg(test)]
#[path = "stations_page_test.rs"]
mod stations_page_test;

use leptos::prelude::*;

use crate::components::grid_host::GridHost;
use crate::components::spinner::LoadingSpinner;
use crate::components::station_detail::StationDetail;
use crate::components::station_stats::StationStats;
use crate::state::stations::StationsState;

/// Poll interval for live status.
const STATUS_POLL_SECS: u64 = 30;

/// User-visible message when a status fetch fails.
const STATUS_FETCH_FAILED: &str = "Failed to load PC status. Please try again.";

/// Kick off one status fetch. Browser-only; used by mount, poll, and the
/// refresh button alike.
fn load_station_status(stations: RwSignal<StationsState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_station_status().await {
                Ok(response) => stations.update(|s| s.apply_feed(response.pcs, response.stats)),
                Err(err) => {
                    log::error!("station status fetch failed: {err}");
                    stations.update(|s| s.apply_failure(STATUS_FETCH_FAILED.to_owned()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stations;
    }
}

/// The live station board route.
#[component]
pub fn StationsPage() -> impl IntoView {
    let stations = RwSignal::new(StationsState::loading());
    provide_context(stations);

    load_station_status(stations);

    // Re-fetch on a fixed interval for as long as the page is mounted.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(STATUS_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                load_station_status(stations);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_refresh = move |_| load_station_status(stations);

    view! {
        <div class="stations-page">
            <header class="stations-page__header">
                <h1 class="stations-page__title">"Live Station Status"</h1>
                <button class="stations-page__refresh" on:click=on_refresh title="Refresh now">
                    "⟳ Refresh"
                </button>
            </header>

            <Show
                when=move || !stations.get().loading
                fallback=|| view! { <LoadingSpinner/> }
            >
                <Show
                    when=move || stations.get().error.is_none()
                    fallback=move || {
                        view! {
                            <div class="stations-page__error">
                                <p>{move || stations.get().error.unwrap_or_default()}</p>
                                <button class="stations-page__retry" on:click=on_refresh>
                                    "Try Again"
                                </button>
                            </div>
                        }
                    }
                >
                    <StationStats/>
                    <GridHost/>
                </Show>
            </Show>

            <StationDetail/>
        </div>
    }
}
