//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state shared across pages (via context). The
//! others are view-local models owned by a single page or component, kept
//! free of Leptos types so they can be tested as plain structs.

pub mod bookings;
pub mod chat;
pub mod questions;
pub mod session;
