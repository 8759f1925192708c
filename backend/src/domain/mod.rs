//! Domain layer: entities, validation, services, and the ports they drive.

mod auth;
mod auth_service;
mod complaint;
mod customer;
mod error;
mod reference;
mod user;

pub mod ports;

pub use auth::{LoginCredentials, LoginValidationError, SignupForm, SignupValidationError};
pub use auth_service::AuthService;
pub use complaint::{
    ComplaintListing, ComplaintStatus, InvalidStatus, NewComplaint,
};
pub use customer::{CustomerListing, CustomerPatch, NewCustomer};
pub use error::{Error, ErrorCode};
pub use reference::{Department, District};
pub use user::{NewUser, StoredUser};
