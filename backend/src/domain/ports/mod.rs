//! Outbound port traits the domain services depend on.
//!
//! Adapters under `outbound` implement these; tests substitute stubs.

mod macros;

mod complaint_repository;
mod customer_repository;
mod password_hasher;
mod reference_data;
mod store_error;
mod token_issuer;
mod user_repository;

pub use complaint_repository::ComplaintRepository;
pub use customer_repository::CustomerRepository;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use reference_data::ReferenceDataRepository;
pub use store_error::StoreError;
pub use token_issuer::{TokenClaims, TokenError, TokenIssuer};
pub use user_repository::{UserRepository, UserStoreError};
