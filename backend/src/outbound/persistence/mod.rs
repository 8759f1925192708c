//! Diesel/PostgreSQL adapters for the domain's persistence ports.

mod diesel_complaint_repository;
mod diesel_customer_repository;
mod diesel_reference_data;
mod diesel_user_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_complaint_repository::DieselComplaintRepository;
pub use diesel_customer_repository::DieselCustomerRepository;
pub use diesel_reference_data::DieselReferenceDataRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
