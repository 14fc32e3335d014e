//! Read-only profile view for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::{Session, use_session};
use crate::util::auth::install_unauth_redirect;

/// Placeholder for profile fields the backend did not send.
const NOT_SET: &str = "-";

/// Labelled profile fields in display order.
pub fn profile_rows(session: &Session) -> Vec<(&'static str, String)> {
    let user = &session.user;
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_SET.to_owned());
    vec![
        ("Username", show(&user.username)),
        ("Email", show(&user.email)),
        ("Role", show(&user.role_name)),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <main class="profile-page">
            <Navbar page="Edit Profile"/>
            <dl class="profile-page__fields">
                {move || {
                    profile_rows(&session.get())
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </dl>
        </main>
    }
}
