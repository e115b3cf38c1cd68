//! JWT session token issuance and verification
//!
//! Tokens are HS256-signed JWTs whose `sub` claim carries the account email.
//! The signing key is handed to [`JwtService`] once at startup and is never
//! rotated while the process runs; rotating it means restarting with a new
//! `SHOP_SECURITY__JWT_SECRET`, which also invalidates every issued session.

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum HS256 secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Why a token was rejected.
///
/// Each kind ends up as an authentication rejection at the HTTP boundary; the
/// distinction only matters for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not match")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token carries no subject")]
    MissingSubject,
}

/// Verified session claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// Claims as they come off the wire, before the subject check.
#[derive(Debug, Deserialize)]
struct UncheckedClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    iat: i64,
    exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create JWT service from a raw secret
    pub fn new(secret: &[u8]) -> Result<Self, AppError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::Config(format!(
                "JWT secret too short (min {} chars)",
                MIN_SECRET_LEN
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second its `exp` passes.
        validation.leeway = 0;
        // `sub` is checked after expiry, see `verify`.
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(config.security.jwt_secret.expose_secret().as_bytes())
    }

    /// Issue a signed token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode session token: {:?}", e);
            AppError::Internal(format!("Failed to encode session token: {}", e))
        })
    }

    /// Verify a token: signature first, then expiry, then subject.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<UncheckedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let kind = match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::BadSignature
                    }
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                };
                tracing::debug!(error = ?e, kind = %kind, "Token verification failed");
                kind
            })?;

        let UncheckedClaims { sub, iat, exp } = data.claims;
        let sub = sub
            .filter(|s| !s.trim().is_empty())
            .ok_or(TokenError::MissingSubject)?;

        Ok(Claims { sub, iat, exp })
    }
}
