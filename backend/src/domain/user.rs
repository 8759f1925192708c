//! User data model.
//!
//! The stored password is always a bcrypt PHC string; plaintext passwords
//! exist only inside [`crate::domain::SignupForm`] and
//! [`crate::domain::LoginCredentials`] and never appear on this type.

/// A user record as handed to the store for insertion.
///
/// `password_hash` must already be hashed; the repository persists it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// The subset of a stored user row needed to authenticate a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
}
