//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide whether a
//! failure is alerted, shown inline, or only logged. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{DataEnvelope, LoginRequest};
use super::types::LoginResponse;
use crate::state::bookings::{Booking, Decision};
use crate::state::chat::{Conversation, Message, NewMessage};
use crate::state::questions::QuestionItem;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    endpoint("/Auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookings_endpoint(user_id: &str) -> String {
    endpoint(&format!("/Booking/mentor/{user_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_decision_endpoint(booking_id: i64, decision: Decision) -> String {
    let action = match decision {
        Decision::Accept => "accept",
        Decision::Reject => "reject",
    };
    endpoint(&format!("/Booking/{booking_id}/{action}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn conversations_endpoint() -> String {
    endpoint("/Conversation/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(conversation_id: i64) -> String {
    endpoint(&format!("/Conversation/{conversation_id}/messages"))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_message_endpoint() -> String {
    endpoint("/Conversation/message")
}

#[cfg(any(test, feature = "hydrate"))]
fn questions_endpoint() -> String {
    endpoint("/Question")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// The backend signals success with exactly 200.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if status == 200 { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a token and profile via `POST /Auth/login`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the server rejects the
/// credentials, or the body cannot be decoded.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch all bookings made with mentor `user_id`.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status, or decode failure.
pub async fn fetch_bookings(user_id: &str) -> Result<Vec<Booking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&bookings_endpoint(user_id))
            .send()
            .await
            .map_err(network_error)?;
        let envelope: DataEnvelope<Vec<Booking>> = read_json(resp).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// Accept or reject booking `booking_id`.
///
/// # Errors
///
/// Returns an `ApiError` unless the backend answers 200.
pub async fn decide_booking(booking_id: i64, decision: Decision, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&booking_decision_endpoint(booking_id, decision))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (booking_id, decision, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every conversation the token's user takes part in, open or closed.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status, or decode failure.
pub async fn fetch_conversations(token: &str) -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&conversations_endpoint())
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full message history of one conversation.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status, or decode failure.
pub async fn fetch_messages(conversation_id: i64, token: &str) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&messages_endpoint(conversation_id))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, token);
        Err(ApiError::Unavailable)
    }
}

/// Post a message and return the stored copy.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status, or decode failure.
pub async fn create_message(message: &NewMessage, token: &str) -> Result<Message, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&create_message_endpoint())
            .header("Authorization", &bearer_header(token))
            .json(message)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the public question list shown in the landing carousel.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status, or decode failure.
pub async fn fetch_questions() -> Result<Vec<QuestionItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&questions_endpoint())
            .send()
            .await
            .map_err(network_error)?;
        let envelope: DataEnvelope<Vec<QuestionItem>> = read_json(resp).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
