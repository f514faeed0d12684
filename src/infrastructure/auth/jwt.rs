//! Session token issuing and validation (JWT, HS256)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account ID)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Create new claims for an account
    pub fn new(account_id: &AccountId, expiration_days: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::days(expiration_days as i64);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Get the account id from the claims
    pub fn account_id(&self) -> Result<AccountId, DomainError> {
        AccountId::parse(&self.sub)
            .map_err(|_| DomainError::unauthorized("Invalid token subject"))
    }
}

/// Configuration for the session issuer
///
/// The signing secret is process-wide configuration injected at startup.
/// Rotating the secret invalidates every outstanding token: tokens signed
/// under a retired key simply fail validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in days
    pub expiration_days: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_days: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_days,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_days: 7,
        }
    }
}

/// Trait for session token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed, time-bounded token for an account
    fn issue(&self, account_id: &AccountId) -> Result<String, DomainError>;

    /// Validate a token and return its claims
    ///
    /// Expired and tampered tokens are rejected with the same uninformative
    /// unauthorized error - callers cannot distinguish the two cases.
    fn validate(&self, token: &str) -> Result<SessionClaims, DomainError>;
}

/// Leeway applied at validation to avoid false rejections near expiry
const VALIDATION_LEEWAY_SECS: u64 = 60;

/// HS256 session issuer backed by a shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_days", &self.config.expiration_days)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new session issuer with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Create a session issuer with default configuration
    pub fn with_default_config() -> Self {
        Self::new(JwtConfig::default())
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, account_id: &AccountId) -> Result<String, DomainError> {
        let claims = SessionClaims::new(account_id, self.config.expiration_days);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let mut validation = Validation::default();
        validation.leeway = VALIDATION_LEEWAY_SECS;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| DomainError::unauthorized("Invalid or expired token"))?;

        Ok(token_data.claims)
    }
}
