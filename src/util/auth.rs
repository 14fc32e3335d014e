//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::{Session, SessionContext};

/// Route users here when they are not signed in.
pub const LOGIN_PATH: &str = "/login";

/// Redirect only once persisted state has been read, so a reload does not
/// bounce a signed-in user to the login page.
pub fn should_redirect_unauth(restored: bool, session: &Session) -> bool {
    restored && !session.is_authenticated()
}

/// True while the location still shows the route the guard was installed
/// on. A page being torn down after a navigation must not redirect.
pub fn still_on_guarded_route(guarded: &str, current: &str) -> bool {
    guarded == current
}

/// Redirect to `/login` whenever the session is restored and unauthenticated.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let guarded = location.pathname.get_untracked();
    Effect::new(move || {
        if !should_redirect_unauth(session.is_restored(), &session.get()) {
            return;
        }
        if location.pathname.with_untracked(|current| still_on_guarded_route(&guarded, current)) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
