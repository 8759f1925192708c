//! Port abstraction for adaptive password hashing.

use super::macros::define_port_error;

define_port_error! {
    /// Failures raised while hashing or verifying passwords.
    pub enum PasswordHashError {
        /// The hashing backend rejected the input or failed internally.
        Hash { message: String } => "password hashing failed: {message}",
    }
}

/// Adaptive one-way password hashing.
///
/// Hashing is CPU-bound by design; callers on an async runtime must move
/// these calls onto a blocking thread.
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash suitable for storage.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check a candidate password against a stored hash.
    ///
    /// A malformed stored hash is an error, not a mismatch.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
