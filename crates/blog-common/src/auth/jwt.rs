//! JWT access tokens
//!
//! Login and refresh flows live outside this service; it only needs to
//! validate the bearer tokens they hand out. Issuing is kept for tests and tooling.

use blog_core::Snowflake;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// HS256 token encoder/decoder
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Lifetime of issued access tokens, in seconds
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Issue an access token for a user
    pub fn issue_access_token(&self, user_id: Snowflake) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
