//! REST helpers for the screening backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are folded into `AuthError` so
//! the form always lands in a displayable state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthError, AuthRequest};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Send one login or register call and return the issued access token.
///
/// # Errors
///
/// Returns the classified [`AuthError`] for rate limiting, validation
/// details, missing tokens, and transport failures.
pub async fn submit_auth(request: &AuthRequest) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(crate::config::API_BASE_URL, request.path());
        log::debug!("auth request: POST {url}");
        let resp = gloo_net::http::Request::post(&url)
            .json(&request.body())
            .map_err(|e| {
                log::warn!("auth request build failed: {e}");
                AuthError::Failed
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("auth request failed: {e}");
                AuthError::Failed
            })?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let result = super::types::interpret_response(status, &body);
        if let Err(e) = &result {
            log::warn!("auth request rejected: status={status} error={e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthError::Failed)
    }
}
