//! API-key gate.
//!
//! `ApiKey` is an extractor: a handler that lists it as its first argument
//! cannot run unless the request carried the configured key in `X-API-KEY`.
//! The extracted value is the authenticated key itself.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared secret used when none is configured.
pub const DEFAULT_API_KEY: &str = "abc123";

/// An API key that matched the configured secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Exact byte equality, in constant time.
pub fn is_valid_api_key(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

impl<S> FromRequestParts<AppState<S>> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(key) if is_valid_api_key(key, &state.api_key) => Ok(ApiKey(key.to_owned())),
            _ => {
                debug!(present = presented.is_some(), "rejecting API key");
                Err(ApiError::InvalidApiKey)
            }
        }
    }
}
