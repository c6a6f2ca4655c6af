//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `menu`, `stations`, `ui`) so individual
//! components can depend on small focused models. Each model is an explicit
//! value provided through Leptos context — mutation goes through its methods,
//! never through ambient singletons.

pub mod cart;
pub mod menu;
pub mod stations;
pub mod ui;
