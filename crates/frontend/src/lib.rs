//! Smart Bell Dashboard - Yew WASM frontend.
//!
//! Renders today's lecture schedule and lets an administrator edit
//! lecture names and time slots inline. All data lives on the remote
//! Smart Bell API; every successful write is followed by a full
//! re-read, so the view only ever shows server truth.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
