//! Port abstraction for the seeded district/department lookup tables.

use async_trait::async_trait;

use crate::domain::{Department, District};

use super::StoreError;

#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    /// All districts, in store order.
    async fn list_districts(&self) -> Result<Vec<District>, StoreError>;

    /// All departments, in store order.
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;
}
