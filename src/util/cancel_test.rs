use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn new_token_is_live() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_shared_between_clones() {
    let token = CancelToken::new();
    let task_copy = token.clone();
    token.cancel();
    assert!(task_copy.is_cancelled());
}

#[test]
fn owner_cleanup_cancels_token() {
    let owner = Owner::new();
    let token = owner.with(CancelToken::for_owner);
    assert!(!token.is_cancelled());

    owner.cleanup();
    assert!(token.is_cancelled());
}
