//! # Auth Errors
//!
//! Error types for the token-verification seam.

use thiserror::Error;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Token verification failures. All map to 401 at the gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No bearer token on the request.
    #[error("Missing authorization header")]
    MissingToken,

    /// Token is not a well-formed JWT for this audience/issuer.
    #[error("Malformed token")]
    MalformedToken,

    /// Token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Token signature does not verify.
    #[error("Invalid token signature")]
    InvalidSignature,
}
