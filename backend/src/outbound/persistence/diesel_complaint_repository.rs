//! PostgreSQL-backed `ComplaintRepository` implementation using Diesel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ComplaintRepository, StoreError};
use crate::domain::{ComplaintListing, ComplaintStatus, NewComplaint};

use super::error_mapping::{map_pool_error, map_store_error};
use super::models::NewComplaintRow;
use super::pool::DbPool;
use super::schema::{complaints, customers, departments, districts};

/// Diesel-backed implementation of the `ComplaintRepository` port.
#[derive(Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type ComplaintListingRow = (
    i32,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
    DateTime<Utc>,
);

fn row_to_listing(row: ComplaintListingRow) -> ComplaintListing {
    let (complaint_id, subject, description, customer_name, district, department, status, created_at) =
        row;
    ComplaintListing {
        complaint_id,
        subject,
        description,
        customer_name,
        district,
        department,
        status,
        created_at,
    }
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn list(&self) -> Result<Vec<ComplaintListing>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let rows = complaints::table
            .left_join(customers::table)
            .left_join(districts::table)
            .left_join(departments::table)
            .select((
                complaints::complaint_id,
                complaints::subject,
                complaints::description,
                customers::name.nullable(),
                districts::name.nullable(),
                departments::name.nullable(),
                complaints::status,
                complaints::created_at,
            ))
            .load::<ComplaintListingRow>(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows.into_iter().map(row_to_listing).collect())
    }

    async fn insert(&self, complaint: &NewComplaint) -> Result<i32, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        // `created_at` is left to the column default so the store stamps
        // the insert exactly once.
        let row = NewComplaintRow {
            subject: &complaint.subject,
            description: &complaint.description,
            district_id: complaint.district_id,
            department_id: complaint.department_id,
            status: complaint.status.as_str(),
            customer_id: complaint.customer_id,
        };

        diesel::insert_into(complaints::table)
            .values(&row)
            .returning(complaints::complaint_id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_store_error)
    }

    async fn set_status(
        &self,
        complaint_id: i32,
        status: ComplaintStatus,
    ) -> Result<u64, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let rows =
            diesel::update(complaints::table.filter(complaints::complaint_id.eq(complaint_id)))
                .set(complaints::status.eq(status.as_str()))
                .execute(&mut conn)
                .await
                .map_err(map_store_error)?;

        Ok(rows as u64)
    }
}
