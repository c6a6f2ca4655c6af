//! Canvas floor-map engine for the gaming station status board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! station board canvas: placing stations from the design-time floor layout,
//! resolving each layout slot against the live status feed, hit-testing the
//! pointer against station glyphs, and drawing the scene. The host UI layer is
//! responsible only for wiring DOM events to the grid and reacting to the
//! resulting [`engine::Action`]s (cursor changes, detail popups).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level grid and testable [`engine::GridCore`] |
//! | [`feed`] | Live station status records and identifier resolution |
//! | [`layout`] | Design-time floor placement of station slots |
//! | [`hit`] | Pointer hit-testing against station glyphs |
//! | [`render`] | Scene rendering to the 2D canvas context |
//! | [`consts`] | Shared numeric and color constants |

pub mod consts;
pub mod engine;
pub mod feed;
pub mod hit;
pub mod layout;
pub mod render;
