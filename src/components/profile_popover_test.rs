use std::sync::Arc;

use leptos::reactive::owner::Owner;

use super::*;
use crate::state::session::UserInfo;
use crate::util::session_storage::MemorySessionStorage;

fn session_with(username: Option<&str>, role: Option<&str>) -> Session {
    Session::new(
        "tok",
        UserInfo {
            id: Some("1".to_owned()),
            username: username.map(str::to_owned),
            email: None,
            role_name: role.map(str::to_owned),
        },
    )
}

fn labels(links: &[MenuLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

#[test]
fn avatar_uses_first_letter_of_username() {
    assert_eq!(avatar_label(&session_with(Some("mentor"), None)), "M");
}

#[test]
fn avatar_falls_back_without_username() {
    assert_eq!(avatar_label(&session_with(None, None)), "CN");
    assert_eq!(avatar_label(&Session::default()), "CN");
}

#[test]
fn admin_role_sees_dashboard_first() {
    let links = menu_links(&session_with(Some("root"), Some("Admin")));
    assert_eq!(labels(&links), vec!["Dashboard", "Edit Profile", "Question"]);
    assert_eq!(links[0].href, "/admin/dashboard");
}

#[test]
fn non_admin_does_not_see_dashboard() {
    let links = menu_links(&session_with(Some("admin1"), Some("Mentor")));
    assert_eq!(labels(&links), vec!["Edit Profile", "Question"]);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn sign_out_navigates_home_before_clearing_session() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = SessionContext::new(Arc::new(MemorySessionStorage::new()));
        ctx.login("tok", UserInfo::default());

        let mut visited = Vec::new();
        sign_out(ctx, |path| {
            visited.push((path.to_owned(), ctx.get_untracked().is_authenticated()));
        });

        assert_eq!(visited, vec![("/".to_owned(), true)]);
        assert!(!ctx.get_untracked().is_authenticated());
    });
}

#[test]
fn sign_out_clears_persisted_slots() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = Arc::new(MemorySessionStorage::new());
        let ctx = SessionContext::new(storage.clone());
        ctx.login("tok", UserInfo::default());
        assert!(!storage.is_empty());

        sign_out(ctx, |_| {});

        assert!(storage.is_empty());
        assert_eq!(ctx.get_untracked(), Session::default());
    });
}
