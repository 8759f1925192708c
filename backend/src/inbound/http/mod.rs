//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod bearer;
pub mod complaints;
pub mod customers;
pub mod error;
pub mod health;
pub mod reference;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod validation;

pub use error::ApiResult;
