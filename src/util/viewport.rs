//! Viewport width tracking for responsive widgets.
//!
//! TRADE-OFFS
//! ==========
//! SSR has no viewport, so the server renders the widest layout and the
//! client corrects it after hydration via the resize listener.

use leptos::prelude::*;

/// Width assumed when no browser window is available.
pub const FALLBACK_WIDTH_PX: f64 = 1280.0;

/// Current `window.innerWidth` in CSS pixels.
pub fn current_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_WIDTH_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_WIDTH_PX
    }
}

/// Signal tracking the viewport width, updated on `resize`.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let width = RwSignal::new(FALLBACK_WIDTH_PX);
    Effect::new(move || width.set(current_width()));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| width.set(current_width()));
        on_cleanup(move || handle.remove());
    }

    width.read_only()
}
