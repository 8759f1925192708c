//! Authentication primitives: login credentials and the signup form.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.
//! Plaintext passwords are held in [`Zeroizing`] buffers so they are wiped
//! when the value is dropped.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the authentication service.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain error returned when a signup payload value is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    /// A required field was missing or blank once trimmed.
    BlankField(&'static str),
}

impl SignupValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankField(field) => field,
        }
    }
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for SignupValidationError {}

/// Validated signup form.
///
/// ## Invariants
/// - every field is non-blank; text fields are trimmed.
/// - `password` keeps caller whitespace and is wiped on drop.
#[derive(Debug, Clone)]
pub struct SignupForm {
    name: String,
    email: String,
    phone: String,
    username: String,
    password: Zeroizing<String>,
    role: String,
}

impl SignupForm {
    /// Construct a signup form from raw string inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        phone: &str,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, SignupValidationError> {
        let name = non_blank(name, "name")?;
        let email = non_blank(email, "email")?;
        let phone = non_blank(phone, "phone")?;
        let username = non_blank(username, "username")?;
        if password.is_empty() {
            return Err(SignupValidationError::BlankField("password"));
        }
        let role = non_blank(role, "role")?;

        Ok(Self {
            name,
            email,
            phone,
            username,
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Full name of the new user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Login name; must be unique across users.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plaintext password; only ever handed to the password hasher.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Role label, e.g. `user` or `admin`.
    pub fn role(&self) -> &str {
        &self.role
    }
}

fn non_blank(value: &str, field: &'static str) -> Result<String, SignupValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SignupValidationError::BlankField(field));
    }
    Ok(trimmed.to_owned())
}
