//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time through the
//! `MENTOR_API_BASE` environment variable so the WASM bundle needs no
//! runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback base used when `MENTOR_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Backend API base URL without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("MENTOR_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
