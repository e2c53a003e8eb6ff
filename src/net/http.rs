//! HTTP plumbing shared by every REST call.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, with the bearer token
//! attached to every request that has one. Server-side (SSR): stubs
//! returning errors since these calls are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Non-2xx responses are classified through `net::error`. When a response
//! proves the token dead, the persistent session pair is cleared *here*,
//! before the error is returned, so no follow-up request can be issued
//! under a token the server has already rejected.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::classify_status;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

/// Turn a non-2xx response into an `ApiError`, clearing the persisted
/// session first when the body signals a rejected token.
#[cfg(feature = "hydrate")]
async fn reject(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = classify_status(status, &body);
    if err == ApiError::SessionInvalidated {
        crate::util::storage::clear_session();
        log::warn!("session invalidated by server ({status}): {body}");
    }
    err
}

#[cfg(feature = "hydrate")]
fn transport(e: &gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// GET `path` and decode a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(path), token)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<T>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST a JSON `body` to `path` and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(path), token)
            .json(body)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<T>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// PUT a JSON `body` to `path` and decode a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::put(path), token)
            .json(body)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json::<T>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// DELETE `path`; the response body (usually empty) is discarded.
pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::delete(path), token)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// GET `path` as raw bytes (binary download endpoints).
pub async fn get_bytes(path: &str, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(path), token)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.binary().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
