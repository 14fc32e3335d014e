//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, callbacks) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod home;
pub mod login;
pub mod my_requests;
pub mod profile;
pub mod questions;
