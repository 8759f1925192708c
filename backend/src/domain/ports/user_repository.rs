//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, StoredUser};

use super::macros::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    ///
    /// `DuplicateUsername` is its own variant because the application relies
    /// on the store's unique constraint to arbitrate concurrent signups; the
    /// adapter must surface that violation distinctly so the service can
    /// answer 409 instead of a generic fault.
    pub enum UserStoreError {
        /// Repository connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// The unique constraint on `username` rejected the insert.
        DuplicateUsername => "username already exists",
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the generated numeric id.
    async fn insert(&self, user: &NewUser) -> Result<i32, UserStoreError>;

    /// Fetch the stored credentials for a username, if the user exists.
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, UserStoreError>;
}
