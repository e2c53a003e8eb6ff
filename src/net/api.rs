//! Typed endpoint calls for the card-key REST backend.
//!
//! ERROR HANDLING
//! ==============
//! All calls return `Result<_, ApiError>`. Authenticated calls route
//! failures through the classifier in `http`; the login call is special
//! cased so its rejections stay inline credential errors and never
//! trigger the forced-logout path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http;
use super::types::{
    Card, CreateUserRequest, GenerateCardsRequest, LoginRequest, LoginResponse, OneOrMany,
    UpdateUserRequest, UserProfile,
};

#[cfg(any(test, feature = "hydrate"))]
fn card_endpoint(id: &str) -> String {
    format!("/api/cards/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> String {
    format!("/api/users/{id}")
}

/// Exchange credentials for a bearer token via `POST /api/users/login`.
///
/// # Errors
///
/// `ApiError::AuthRejected` with the server body verbatim on any non-2xx
/// response; `ApiError::Network` on transport failure.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/users/login")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(super::error::login_rejection(&body));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Resolve the account behind `token` via `GET /api/users/me`.
pub async fn fetch_current_user(token: &str) -> Result<UserProfile, ApiError> {
    http::get_json("/api/users/me", Some(token)).await
}

/// Fetch the full card list.
pub async fn fetch_cards(token: &str) -> Result<Vec<Card>, ApiError> {
    http::get_json("/api/cards", Some(token)).await
}

/// Generate a batch of cards. The response shape varies by backend
/// revision; callers should re-fetch rather than merge it.
pub async fn generate_cards(
    token: &str,
    request: &GenerateCardsRequest,
) -> Result<OneOrMany<Card>, ApiError> {
    http::post_json("/api/cards/generate", Some(token), request).await
}

/// Delete one card by canonical id.
pub async fn delete_card(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&card_endpoint(id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Download the CSV export as raw bytes.
pub async fn export_cards(token: &str) -> Result<Vec<u8>, ApiError> {
    http::get_bytes("/api/cards/export", Some(token)).await
}

/// Fetch all accounts (admin only).
pub async fn fetch_users(token: &str) -> Result<Vec<UserProfile>, ApiError> {
    http::get_json("/api/users", Some(token)).await
}

/// Create an account via `POST /api/users/register` (admin only).
pub async fn create_user(
    token: &str,
    request: &CreateUserRequest,
) -> Result<UserProfile, ApiError> {
    http::post_json("/api/users/register", Some(token), request).await
}

/// Update an account via `PUT /api/users/{id}` (admin only).
pub async fn update_user(
    token: &str,
    id: &str,
    request: &UpdateUserRequest,
) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::put_json(&user_endpoint(id), Some(token), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete an account by id (admin only).
pub async fn delete_user(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&user_endpoint(id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
