//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines request/response
//! envelopes shared by several endpoints. Domain payloads live next to the
//! state that owns them in `crate::state`.

pub mod api;
pub mod types;
