//! HS256 JWT adapter for the `TokenIssuer` port.
//!
//! Tokens live for exactly 15 minutes. Verification runs with zero leeway
//! so the expiry boundary is sharp, and any structural or signature
//! failure is reported as an invalid token.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenClaims, TokenError, TokenIssuer};

const TOKEN_TTL_MINUTES: i64 = 15;

/// Wire shape of the signed claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,
    username: String,
    iat: i64,
    exp: i64,
}

/// Symmetric-key token issuer. The secret is process-wide state,
/// initialised at startup and never rotated.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    fn issue_at(
        &self,
        now: DateTime<Utc>,
        user_id: i32,
        username: &str,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id,
            username: username.to_owned(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| TokenError::mint(err.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError> {
        self.issue_at(Utc::now(), user_id, username)
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::expired(),
                _ => TokenError::invalid(),
            }
        })?;

        Ok(TokenClaims {
            user_id: data.claims.sub,
            username: data.claims.username,
        })
    }
}
