//! JWT token issuance and resolution
//!
//! Issues signed, time-limited tokens carrying the user id and role, and
//! resolves presented tokens back into an identity. Keys are pre-computed
//! once at startup for optimal performance.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account role carried into the token
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Identity resolved from a verified token
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub user_id: i64,
    pub role: String,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Design: Uses pre-computed keys to avoid expensive key derivation
/// on every request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_ttl_secs: i64,
    leeway_secs: u64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// # Performance Note
    /// Call this once at application startup and store in AppState.
    /// Do NOT create per-request.
    pub fn new(secret: &str, token_ttl_secs: i64, leeway_secs: u64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_ttl_secs,
            leeway_secs,
        }
    }

    /// Issue a signed token for a user
    #[inline]
    pub fn issue(&self, user_id: i64, role: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Resolve a token into the identity it carries
    ///
    /// Fails closed: bad signature, malformed claims and expired tokens
    /// all come back as errors. Callers present these uniformly.
    /// The configured leeway is applied explicitly; the jsonwebtoken
    /// default of 60 seconds is never used.
    #[inline]
    pub fn resolve(&self, token: &str) -> Result<TokenIdentity> {
        let mut validation = Validation::default();
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, self.keys.decoding(), &validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        let user_id = token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid subject in token"))?;

        Ok(TokenIdentity {
            user_id,
            role: token_data.claims.role,
        })
    }
}
