//! Port abstraction for complaint persistence adapters.

use async_trait::async_trait;

use crate::domain::{ComplaintListing, ComplaintStatus, NewComplaint};

use super::StoreError;

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// All complaints joined with customer, district, and department names.
    async fn list(&self) -> Result<Vec<ComplaintListing>, StoreError>;

    /// Insert a complaint and return the generated numeric id.
    ///
    /// `created_at` is set by the store at insert time and never updated.
    async fn insert(&self, complaint: &NewComplaint) -> Result<i32, StoreError>;

    /// Overwrite the status column; returns the number of rows affected.
    ///
    /// Setting the same status twice is a no-op at the data level, which is
    /// what makes repeated resolution idempotent.
    async fn set_status(
        &self,
        complaint_id: i32,
        status: ComplaintStatus,
    ) -> Result<u64, StoreError>;
}
