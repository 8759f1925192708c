//! bcrypt adapter for the `PasswordHasher` port.

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used in production. Kept fixed so stored hashes stay
/// comparable across releases.
const BCRYPT_COST: u32 = 10;

/// Adaptive salted hashing backed by bcrypt.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Production hasher at cost 10.
    pub fn new() -> Self {
        Self { cost: BCRYPT_COST }
    }

    /// Hasher with an explicit cost. Tests lower it to keep suites fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(password, self.cost).map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password, hash).map_err(|err| PasswordHashError::hash(err.to_string()))
    }
}
