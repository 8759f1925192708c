//! Port abstraction for bearer token minting and verification.

use super::macros::define_port_error;

/// Claims carried by an accepted bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: i32,
    pub username: String,
}

define_port_error! {
    /// Failures raised while minting or verifying bearer tokens.
    pub enum TokenError {
        /// The signing backend failed to produce a token.
        Mint { message: String } => "token minting failed: {message}",
        /// The token failed signature or structural checks.
        Invalid => "invalid token",
        /// The token was well formed but past its expiry.
        Expired => "token expired",
    }
}

/// Short-lived signed bearer tokens tying a request to a user.
pub trait TokenIssuer: Send + Sync {
    /// Mint a token embedding the given claims, valid for a fixed lifetime.
    fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError>;

    /// Verify a presented token and recover its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
