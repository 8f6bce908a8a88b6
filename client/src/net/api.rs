//! REST API helpers for the document backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Callers log failures and keep
//! their current state; nothing here is fatal to the workspace.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{HistoryBuckets, LoginTokens};

pub const DOCUMENTS_PATH: &str = "api/documents/";
pub const HISTORY_PATH: &str = "api/history/";
pub const LOGIN_PATH: &str = "api/login/";
pub const LOGOUT_PATH: &str = "api/logout/";

/// Upper bound on the logout notification; local sign-out proceeds after it.
pub const LOGOUT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No response before the deadline.
    #[error("request timed out")]
    Timeout,
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(endpoint: &'static str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { endpoint, status })
    }
}

/// Resolve with `request`, or with [`ApiError::Timeout`] if `timer` finishes
/// first. The losing future is dropped.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn within<F, T, R>(request: F, timer: T) -> Result<R, ApiError>
where
    F: std::future::Future<Output = Result<R, ApiError>>,
    T: std::future::Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(std::pin::pin!(request), std::pin::pin!(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn authorized_get<T: serde::de::DeserializeOwned>(
    config: &ApiConfig,
    path: &'static str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&config.endpoint(path))
        .header("Authorization", &bearer(token))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(path, resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch every document path visible to the bearer of `token`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// body that is not a listing.
pub async fn fetch_documents(config: &ApiConfig, token: Option<&str>) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let listing: super::types::DocumentListing = authorized_get(config, DOCUMENTS_PATH, token).await?;
        Ok(listing.files)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the bucketed interaction history.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// malformed body.
pub async fn fetch_history(config: &ApiConfig, token: Option<&str>) -> Result<HistoryBuckets, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        authorized_get(config, HISTORY_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a token pair.
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend rejects the credentials or is
/// unreachable.
pub async fn login(config: &ApiConfig, username: &str, password: &str) -> Result<LoginTokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(LOGIN_PATH, resp.status())?;
        resp.json::<LoginTokens>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, username, password);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to invalidate the session.
///
/// Owned arguments so the returned future outlives the storage it was read
/// from. Gives up after [`LOGOUT_TIMEOUT`].
///
/// # Errors
///
/// Returns an [`ApiError`] when the notification could not be delivered,
/// was refused, or timed out.
pub async fn logout(config: ApiConfig, token: Option<String>, refresh: Option<String>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = async move {
            let body = super::types::LogoutRequest { refresh };
            let resp = gloo_net::http::Request::post(&config.endpoint(LOGOUT_PATH))
                .header("Authorization", &bearer(token.as_deref()))
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check_status(LOGOUT_PATH, resp.status())
        };
        within(request, gloo_timers::future::sleep(LOGOUT_TIMEOUT)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, refresh);
        Err(ApiError::Unavailable)
    }
}
