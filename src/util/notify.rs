//! Blocking user notifications.
//!
//! Uses `window.alert` in the browser. Outside `hydrate` the message is
//! only logged, keeping SSR deterministic.

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    leptos::logging::log!("alert: {message}");
}
