use super::*;
use crate::state::session::UserInfo;

#[test]
fn should_redirect_unauth_when_restored_and_no_token() {
    assert!(should_redirect_unauth(true, &Session::default()));
}

#[test]
fn should_not_redirect_before_restore() {
    assert!(!should_redirect_unauth(false, &Session::default()));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let session = Session::new("tok", UserInfo::default());
    assert!(!should_redirect_unauth(true, &session));
}

#[test]
fn should_redirect_when_token_is_blank() {
    let session = Session::new("", UserInfo::default());
    assert!(should_redirect_unauth(true, &session));
}

#[test]
fn guard_stands_down_after_leaving_its_route() {
    assert!(still_on_guarded_route("/my-requests", "/my-requests"));
    assert!(!still_on_guarded_route("/my-requests", "/"));
}
