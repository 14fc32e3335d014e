//! Session store: authentication token and user profile for the current tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across pages. `App` creates a
//! `SessionContext` and provides it through Leptos context; pages obtain it
//! with `use_session()` instead of reaching for a global. Tests build a
//! `SessionStore` over `MemorySessionStorage` directly.
//!
//! PERSISTENCE
//! ===========
//! Two string slots in `sessionStorage`: `authToken` holds the opaque token
//! and `userInfo` holds the JSON-serialized profile. Restoration happens on
//! the client after hydration, so server and client render the same
//! unauthenticated markup first.
//!
//! ERROR HANDLING
//! ==============
//! A malformed `userInfo` payload is logged and replaced with an empty
//! profile. Nothing here panics or makes network calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::session_storage::SessionStorage;

/// Storage key for the opaque auth token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the serialized `UserInfo`.
pub const USER_INFO_KEY: &str = "userInfo";

/// Errors raised while reading persisted session data.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("malformed stored user info: {0}")]
    MalformedProfile(#[from] serde_json::Error),
}

/// Profile fields returned by the backend at login. All optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl UserInfo {
    /// Parsed role claim, if the backend supplied one.
    pub fn role(&self) -> Option<Role> {
        self.role_name.as_deref().map(Role::parse)
    }

    /// Single upper-cased letter for the avatar fallback.
    pub fn initial(&self) -> Option<String> {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
    }
}

/// Backends disagree on whether user ids are strings or numbers.
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Role claim carried in `UserInfo::role_name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Mentor,
    Mentee,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Self::Admin,
            "mentor" => Self::Mentor,
            "mentee" | "student" | "user" => Self::Mentee,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }

    pub fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAdminDashboard => matches!(self, Self::Admin),
        }
    }
}

/// Privileged actions gated by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    ViewAdminDashboard,
}

/// Authentication token plus profile for the current browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: UserInfo,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self { token: Some(token.into()), user }
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Token for authenticated backend calls.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.is_authenticated() && self.user.role().is_some_and(|role| role.grants(capability))
    }
}

/// Parse a stored `userInfo` payload.
///
/// # Errors
///
/// Returns `SessionError::MalformedProfile` if the payload is not a JSON
/// object matching `UserInfo`.
pub fn parse_user_info(raw: &str) -> Result<UserInfo, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Storage-backed session persistence.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Rebuild the session from storage. Never fails.
    pub fn restore(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = match self.storage.get(USER_INFO_KEY) {
            Some(raw) => parse_user_info(&raw).unwrap_or_else(|e| {
                leptos::logging::error!("session restore: {e}");
                UserInfo::default()
            }),
            None => UserInfo::default(),
        };
        Session { token, user }
    }

    /// Persist `token` and `user`, returning the new session.
    pub fn login(&self, token: &str, user: UserInfo) -> Session {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_INFO_KEY, &raw),
            Err(e) => leptos::logging::error!("session login: failed to serialize user info: {e}"),
        }
        Session::new(token, user)
    }

    /// Clear both storage slots, returning the empty session.
    pub fn logout(&self) -> Session {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_INFO_KEY);
        Session::default()
    }
}

/// Reactive handle to the shared session, provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    restored: RwSignal<bool>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    /// Create an empty context over `storage`. Call `restore` once mounted.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            restored: RwSignal::new(false),
            store: StoredValue::new(SessionStore::new(storage)),
        }
    }

    /// Create the context, provide it to descendants and schedule restoration
    /// for after hydration.
    pub fn provide(storage: Arc<dyn SessionStorage>) -> Self {
        let ctx = Self::new(storage);
        provide_context(ctx);
        Effect::new(move || ctx.restore());
        ctx
    }

    /// Load the persisted session into the shared signal.
    pub fn restore(&self) {
        let session = self.store.with_value(SessionStore::restore);
        self.session.set(session);
        self.restored.set(true);
    }

    pub fn login(&self, token: &str, user: UserInfo) {
        let session = self.store.with_value(|store| store.login(token, user));
        self.session.set(session);
        self.restored.set(true);
    }

    pub fn logout(&self) {
        let session = self.store.with_value(SessionStore::logout);
        self.session.set(session);
    }

    /// Current session (tracked).
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// Whether persisted state has been read yet (tracked).
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }
}

/// Fetch the session context provided by `App`.
///
/// # Panics
///
/// Panics if called outside the component tree rooted at `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
