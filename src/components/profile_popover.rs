//! Avatar popover with identity, role-gated links and logout.

#[cfg(test)]
#[path = "profile_popover_test.rs"]
mod profile_popover_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Capability, Session, SessionContext, use_session};

/// Avatar text shown when the profile has no username.
const AVATAR_FALLBACK: &str = "CN";

/// A link entry in the popover menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub fn avatar_label(session: &Session) -> String {
    session.user.initial().unwrap_or_else(|| AVATAR_FALLBACK.to_owned())
}

/// Menu links visible to `session`, in display order.
pub fn menu_links(session: &Session) -> Vec<MenuLink> {
    let mut links = Vec::with_capacity(3);
    if session.can(Capability::ViewAdminDashboard) {
        links.push(MenuLink {
            href: "/admin/dashboard",
            label: "Dashboard",
        });
    }
    links.push(MenuLink {
        href: "/profile",
        label: "Edit Profile",
    });
    links.push(MenuLink {
        href: "/question",
        label: "Question",
    });
    links
}

/// Where logout lands.
pub const AFTER_LOGOUT_PATH: &str = "/";

/// Leave for `AFTER_LOGOUT_PATH`, then clear the session.
///
/// Navigation has to come first: clearing the session unmounts this
/// popover and wakes the route guard on protected pages, which would
/// otherwise send the user to the login page.
pub fn sign_out<F>(session: SessionContext, navigate: F)
where
    F: FnOnce(&str),
{
    navigate(AFTER_LOGOUT_PATH);
    session.logout();
}

#[component]
pub fn ProfilePopover() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let on_logout = move |_| {
        open.set(false);
        sign_out(session, |path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <div class="profile-popover">
            <button
                class="profile-popover__avatar"
                title=move || session.get().user.username.unwrap_or_default()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || avatar_label(&session.get())}
            </button>
            <div class="profile-popover__menu" hidden=move || !open.get()>
                {move || {
                    menu_links(&session.get())
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="profile-popover__item" href=link.href on:click=move |_| open.set(false)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="profile-popover__item profile-popover__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
