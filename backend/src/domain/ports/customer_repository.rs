//! Port abstraction for customer persistence adapters.

use async_trait::async_trait;

use crate::domain::{CustomerListing, CustomerPatch, NewCustomer};

use super::StoreError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers with their district and department names joined in.
    async fn list(&self) -> Result<Vec<CustomerListing>, StoreError>;

    /// Insert a customer and return the generated numeric id.
    async fn insert(&self, customer: &NewCustomer) -> Result<i32, StoreError>;

    /// Apply a partial update; returns the number of rows affected.
    async fn update(&self, customer_id: i32, patch: &CustomerPatch) -> Result<u64, StoreError>;

    /// Delete a customer; returns the number of rows affected.
    async fn delete(&self, customer_id: i32) -> Result<u64, StoreError>;
}
