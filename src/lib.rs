//! # mentor-client
//!
//! Leptos + WASM frontend for the mentoring/booking platform. Users review
//! the bookings made with them, chat in open conversations, and browse the
//! popular question carousel on the landing page.
//!
//! This crate contains pages, components, view-local state, the session
//! store and the thin HTTP service layer. All booking, chat and question
//! logic lives in the external backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
