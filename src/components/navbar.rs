//! Top navigation bar with breadcrumb and profile popover.

use leptos::prelude::*;

use crate::components::profile_popover::ProfilePopover;
use crate::state::session::use_session;
use crate::util::auth::LOGIN_PATH;

/// Navigation bar for `page`. Shows the popover when signed in and a login
/// link otherwise.
#[component]
pub fn Navbar(#[prop(into)] page: String) -> impl IntoView {
    let session = use_session();
    let title = page.clone();

    view! {
        <nav class="navbar">
            <div class="navbar__crumbs">
                <ol class="navbar__breadcrumb">
                    <li>
                        <a href="/">"home"</a>
                        <span class="navbar__separator" aria-hidden="true">"/"</span>
                    </li>
                    <li>{page}</li>
                </ol>
                <h6 class="navbar__title">{title}</h6>
            </div>
            <div class="navbar__links">
                <a href="/my-requests">"My Requests"</a>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a class="btn" href=LOGIN_PATH>"Sign in"</a> }
                >
                    <ProfilePopover/>
                </Show>
            </div>
        </nav>
    }
}
