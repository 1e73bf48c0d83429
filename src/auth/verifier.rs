//! # Token Verification
//!
//! The gateway consumes authentication, it does not implement it.
//! `TokenVerifier` is the seam the HTTP gate calls; `JwtVerifier` is
//! the provided implementation for HS256 bearer tokens.
//!
//! ## Invariants
//! - Verification is stateless (no lookup against a session store)
//! - Audience and issuer are always checked

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};
use super::principal::AuthPrincipal;

/// Verifies a bearer token and produces the authenticated principal.
///
/// Implementations must be pure per call and safe to share across
/// request tasks.
pub trait TokenVerifier: Send + Sync {
    /// Verify a token, returning the principal it identifies.
    fn verify(&self, token: &str) -> AuthResult<AuthPrincipal>;
}

/// JWT claims carried by gateway access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user id).
    pub sub: String,
    /// Email, if the identity provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role names.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued-at (Unix epoch seconds).
    pub iat: i64,
    /// Expiration (Unix epoch seconds).
    pub exp: i64,
    /// Audience.
    pub aud: String,
    /// Issuer.
    pub iss: String,
}

/// JWT verification configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret.
    pub secret: String,
    /// Token lifetime used when issuing.
    pub token_ttl: Duration,
    /// Expected issuer.
    pub issuer: String,
    /// Expected audience.
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            token_ttl: Duration::minutes(15),
            issuer: "hrgate".to_string(),
            audience: "hrgate".to_string(),
        }
    }
}

/// HS256 JWT verifier.
#[derive(Clone)]
pub struct JwtVerifier {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtVerifier {
    /// Create a verifier with the given configuration.
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a signed token for a principal. Used by the dev server
    /// and by tests; production tokens come from the identity
    /// provider upstream.
    pub fn issue(&self, principal: &AuthPrincipal) -> AuthResult<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: principal.subject.clone(),
            email: principal.email.clone(),
            roles: principal.roles.clone(),
            iat: now.timestamp(),
            exp: (now + self.config.token_ttl).timestamp(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::MalformedToken)
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> AuthResult<AuthPrincipal> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            }
        })?;

        Ok(AuthPrincipal {
            subject: data.claims.sub,
            email: data.claims.email,
            roles: data.claims.roles,
        })
    }
}
