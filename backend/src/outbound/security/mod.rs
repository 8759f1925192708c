//! Credential-handling adapters: password hashing and bearer tokens.

mod jwt;
mod password;

pub use jwt::JwtTokenIssuer;
pub use password::BcryptPasswordHasher;
