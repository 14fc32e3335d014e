//! Admin landing page reached from the popover's "Dashboard" link.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::{Capability, Session, use_session};
use crate::util::auth::install_unauth_redirect;

/// What the dashboard route renders for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    /// Session not restored yet, or about to be redirected to login.
    Pending,
    Denied,
    Granted,
}

pub fn dashboard_view(restored: bool, session: &Session) -> DashboardView {
    if !restored || !session.is_authenticated() {
        DashboardView::Pending
    } else if session.can(Capability::ViewAdminDashboard) {
        DashboardView::Granted
    } else {
        DashboardView::Denied
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <main class="admin-page">
            <Navbar page="Dashboard"/>
            {move || match dashboard_view(session.is_restored(), &session.get()) {
                DashboardView::Pending => view! { <p class="admin-page__status">"Loading..."</p> }.into_any(),
                DashboardView::Denied => {
                    view! { <p class="admin-page__status">"You do not have access to this page."</p> }.into_any()
                }
                DashboardView::Granted => {
                    let name = session.get().user.username.unwrap_or_default();
                    view! {
                        <section class="admin-page__content">
                            <h3>"Admin dashboard"</h3>
                            <p>"Signed in as " {name}</p>
                        </section>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
