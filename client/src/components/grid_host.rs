//! Bridge component between Leptos state and the imperative [`floorgrid`] grid.
//!
//! ARCHITECTURE
//! ============
//! The floorgrid crate owns hit-testing and drawing; this host maps poll
//! results into grid state, forwards pointer events, and drives the
//! continuous redraw loop. The loop is a `gloo-timers` interval that
//! schedules an animation-frame draw with the current timestamp — the
//! occupied pulse must animate even without new input — and its handle is
//! dropped on cleanup so teardown is deterministic.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::{StationState, StationStatus};
use crate::state::stations::StationsState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use floorgrid::engine::{Action, Grid};
#[cfg(feature = "hydrate")]
use floorgrid::feed::{StationRecord, StationState as GridState, StatusFeed};
#[cfg(feature = "hydrate")]
use floorgrid::layout::Point;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Redraw scheduling cadence in milliseconds (~30 ticks per second; each
/// tick requests one animation frame).
#[cfg(feature = "hydrate")]
const ANIMATION_TICK_MS: u32 = 33;

#[cfg(feature = "hydrate")]
fn to_grid_state(state: StationState) -> GridState {
    match state {
        StationState::Available => GridState::Available,
        StationState::Occupied => GridState::Occupied,
        StationState::Maintenance => GridState::Maintenance,
    }
}

#[cfg(feature = "hydrate")]
fn from_grid_state(state: GridState) -> StationState {
    match state {
        GridState::Available => StationState::Available,
        GridState::Occupied => StationState::Occupied,
        GridState::Maintenance => StationState::Maintenance,
    }
}

#[cfg(feature = "hydrate")]
fn to_feed(stations: &[StationStatus]) -> StatusFeed {
    StatusFeed::new(
        stations
            .iter()
            .map(|station| StationRecord {
                number: station.pc_number.clone(),
                name: station.name.clone(),
                state: to_grid_state(station.status),
                location: station.location.clone(),
            })
            .collect(),
    )
}

#[cfg(feature = "hydrate")]
fn to_status(record: &StationRecord) -> StationStatus {
    StationStatus {
        pc_number: record.number.clone(),
        name: record.name.clone(),
        status: from_grid_state(record.state),
        location: record.location.clone(),
    }
}

#[cfg(feature = "hydrate")]
fn sync_viewport(grid: &mut Grid, canvas: &web_sys::HtmlCanvasElement) {
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    grid.set_viewport(width, height, dpr);
}

#[cfg(feature = "hydrate")]
fn render_now(grid: &Rc<RefCell<Option<Grid>>>) {
    if let Some(grid) = grid.borrow_mut().as_mut() {
        if let Err(err) = grid.render(Date::now()) {
            log::error!("grid render failed: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn request_render(grid: &Rc<RefCell<Option<Grid>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(grid);
        return;
    };

    let grid_for_cb = Rc::clone(grid);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&grid_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(grid);
    }
}

#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    canvas: &web_sys::HtmlCanvasElement,
    stations: RwSignal<StationsState>,
) {
    for action in actions {
        match action {
            Action::SetCursor(cursor) => {
                if let Err(err) = canvas.style().set_property("cursor", cursor) {
                    log::error!("failed to set cursor: {err:?}");
                }
            }
            Action::StationChosen(record) => {
                stations.update(|s| s.selected = Some(to_status(&record)));
            }
        }
    }
}

/// Floor map host component.
///
/// On hydration this mounts [`floorgrid::engine::Grid`], keeps its feed in
/// sync with poll results, and renders continuously until unmounted.
#[component]
pub fn GridHost() -> impl IntoView {
    let stations = expect_context::<RwSignal<StationsState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = stations;
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let grid = Rc::new(RefCell::new(None::<Grid>));
    #[cfg(feature = "hydrate")]
    let animation_tick = Rc::new(RefCell::new(None::<Interval>));
    #[cfg(feature = "hydrate")]
    let raf_pending = RwSignal::new(false);

    // Mount: create the grid once the canvas element exists.
    #[cfg(feature = "hydrate")]
    {
        let grid = Rc::clone(&grid);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if grid.borrow().is_some() {
                return;
            }
            let mut instance = Grid::new(canvas.clone());
            sync_viewport(&mut instance, &canvas);
            instance.set_feed(to_feed(&stations.get_untracked().stations));
            *grid.borrow_mut() = Some(instance);
            render_now(&grid);
        });
    }

    // Feed sync: push every poll result into the grid.
    #[cfg(feature = "hydrate")]
    {
        let grid = Rc::clone(&grid);
        Effect::new(move || {
            let feed = to_feed(&stations.get().stations);
            if let Some(grid) = grid.borrow_mut().as_mut() {
                grid.set_feed(feed);
            }
        });
    }

    // Continuous redraw loop for the occupied pulse.
    #[cfg(feature = "hydrate")]
    {
        let grid = Rc::clone(&grid);
        let animation_tick = Rc::clone(&animation_tick);
        let canvas_ref_tick = canvas_ref.clone();
        Effect::new(move || {
            if animation_tick.borrow().is_some() {
                return;
            }
            let grid_for_tick = Rc::clone(&grid);
            let canvas_ref = canvas_ref_tick.clone();
            let tick = Interval::new(ANIMATION_TICK_MS, move || {
                if let Some(canvas) = canvas_ref.get() {
                    if let Some(grid) = grid_for_tick.borrow_mut().as_mut() {
                        sync_viewport(grid, &canvas);
                    }
                }
                request_render(&grid_for_tick, raf_pending);
            });
            *animation_tick.borrow_mut() = Some(tick);
        });

        let animation_tick_cleanup = Rc::clone(&animation_tick);
        on_cleanup(move || {
            animation_tick_cleanup.borrow_mut().take();
        });
    }

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let grid = Rc::clone(&grid);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if let Some(grid) = grid.borrow_mut().as_mut() {
                    sync_viewport(grid, &canvas);
                    let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                    let actions = grid.on_pointer_move(point);
                    process_actions(actions, &canvas, stations);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let grid = Rc::clone(&grid);
            move |_ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if let Some(grid) = grid.borrow_mut().as_mut() {
                    let actions = grid.on_pointer_leave();
                    process_actions(actions, &canvas, stations);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let grid = Rc::clone(&grid);
            move |ev: leptos::ev::MouseEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if let Some(grid) = grid.borrow_mut().as_mut() {
                    sync_viewport(grid, &canvas);
                    let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                    let actions = grid.on_click(point);
                    process_actions(actions, &canvas, stations);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="floor-grid">
            <canvas
                class="floor-grid__canvas"
                node_ref=canvas_ref
                on:pointermove=on_pointer_move
                on:pointerleave=on_pointer_leave
                on:click=on_click
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="floor-grid__legend">
                <span class="floor-grid__legend-item floor-grid__legend-item--available">
                    "Available"
                </span>
                <span class="floor-grid__legend-item floor-grid__legend-item--occupied">
                    "Occupied"
                </span>
                <span class="floor-grid__legend-item floor-grid__legend-item--maintenance">
                    "Maintenance"
                </span>
            </div>
        </div>
    }
}
