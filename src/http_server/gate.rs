//! Authentication gate.
//!
//! Applied to every route in a resource group, ahead of validation:
//! extract the bearer token, verify it, attach the principal. A
//! failure here short-circuits before the schema validator runs.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::{AuthError, TokenVerifier};

use super::errors::ApiError;

/// Extract the Bearer token from the Authorization header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Gate middleware body. Inserts `AuthPrincipal` into request
/// extensions on success.
pub async fn check(
    verifier: Arc<dyn TokenVerifier>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_bearer_token(request.headers()) {
        Some(token) => token.to_string(),
        None => return ApiError::Unauthorized(AuthError::MissingToken).into_response(),
    };

    match verifier.verify(&token) {
        Ok(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(e) => ApiError::Unauthorized(e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
