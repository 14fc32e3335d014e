//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list surfaces. The navbar and popover
//! read the session context directly; list components receive their
//! view-local state and callbacks from the owning page.

pub mod booking_list;
pub mod conversation_panel;
pub mod navbar;
pub mod profile_popover;
pub mod question_carousel;
