use super::*;
use crate::state::session::UserInfo;

fn session_with_role(role: &str) -> Session {
    Session::new(
        "tok",
        UserInfo {
            role_name: Some(role.to_owned()),
            ..UserInfo::default()
        },
    )
}

#[test]
fn admin_is_granted() {
    assert_eq!(dashboard_view(true, &session_with_role("Admin")), DashboardView::Granted);
}

#[test]
fn other_roles_are_denied() {
    assert_eq!(dashboard_view(true, &session_with_role("Mentor")), DashboardView::Denied);
    assert_eq!(dashboard_view(true, &Session::new("tok", UserInfo::default())), DashboardView::Denied);
}

#[test]
fn nothing_is_decided_before_restore_or_without_token() {
    assert_eq!(dashboard_view(false, &session_with_role("Admin")), DashboardView::Pending);
    assert_eq!(dashboard_view(true, &Session::default()), DashboardView::Pending);
}
