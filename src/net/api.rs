//! REST API wrappers for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with
//! `RequestCredentials::Include` so the browser sends and stores the
//! session cookie on every call. Server-side (SSR): stubs failing with a
//! non-network code since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Http`] carrying the status and raw
//! body; transport failures become [`ApiError::Network`] with
//! [`ERR_NETWORK`]. Nothing is retried here.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{AuthResponse, LoginData, RegisterData};

#[cfg(feature = "hydrate")]
use super::error::ERR_NETWORK;

/// Root of the backend API. The cross-origin base is why credentials must
/// be included explicitly rather than relying on same-origin defaults.
pub const API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Failure code used by the SSR stubs.
#[cfg(not(feature = "hydrate"))]
const ERR_BROWSER_ONLY: &str = "ERR_BROWSER_ONLY";

/// Malformed request or response body.
#[cfg(feature = "hydrate")]
const ERR_BAD_BODY: &str = "ERR_BAD_BODY";

/// `POST /auth/login`.
///
/// # Errors
///
/// Fails with [`ApiError::Http`] on a non-2xx status or
/// [`ApiError::Network`] when the server is unreachable.
pub async fn login(data: &LoginData) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/login", data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::network(ERR_BROWSER_ONLY))
    }
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn register(data: &RegisterData) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/register", data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::network(ERR_BROWSER_ONLY))
    }
}

/// `POST /auth/logout`. No request body; the session cookie identifies the
/// session being ended.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn logout() -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|_| ApiError::network(ERR_NETWORK))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network(ERR_BROWSER_ONLY))
    }
}

/// `GET /health` — liveness probe returning a plain status string.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn health() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/health"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|_| ApiError::network(ERR_NETWORK))?;
        if !resp.ok() {
            return Err(http_error(resp).await);
        }
        resp.text()
            .await
            .map_err(|_| ApiError::network(ERR_BAD_BODY))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network(ERR_BROWSER_ONLY))
    }
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// POST a JSON body and decode a JSON response.
#[cfg(feature = "hydrate")]
async fn post_json<B, R>(path: &str, body: &B) -> Result<R, ApiError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|_| ApiError::network(ERR_BAD_BODY))?
        .send()
        .await
        .map_err(|_| ApiError::network(ERR_NETWORK))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<R>(resp: gloo_net::http::Response) -> Result<R, ApiError>
where
    R: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(http_error(resp).await);
    }
    resp.json()
        .await
        .map_err(|_| ApiError::network(ERR_BAD_BODY))
}

#[cfg(feature = "hydrate")]
async fn http_error(resp: gloo_net::http::Response) -> ApiError {
    ApiError::Http {
        status: resp.status(),
        body: resp.text().await.unwrap_or_default(),
    }
}
