//! Full-region loading spinner shown while a fetch is in flight.

use leptos::prelude::*;

/// Centered loading indicator.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-label="Loading">
            <div class="loading-spinner__ring"></div>
        </div>
    }
}
