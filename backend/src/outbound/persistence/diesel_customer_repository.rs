//! PostgreSQL-backed `CustomerRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CustomerRepository, StoreError};
use crate::domain::{CustomerListing, CustomerPatch, NewCustomer};

use super::error_mapping::{map_pool_error, map_store_error};
use super::models::{CustomerChangeset, NewCustomerRow};
use super::pool::DbPool;
use super::schema::{customers, departments, districts};

/// Diesel-backed implementation of the `CustomerRepository` port.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type CustomerListingRow = (i32, String, String, Option<String>, Option<String>);

fn row_to_listing(row: CustomerListingRow) -> CustomerListing {
    let (customer_id, name, phone, district, department) = row;
    CustomerListing {
        customer_id,
        name,
        phone,
        district,
        department,
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn list(&self) -> Result<Vec<CustomerListing>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        // LEFT JOINs: a dangling district or department reference must not
        // drop the customer row.
        let rows = customers::table
            .left_join(districts::table)
            .left_join(departments::table)
            .select((
                customers::customer_id,
                customers::name,
                customers::phone,
                districts::name.nullable(),
                departments::name.nullable(),
            ))
            .load::<CustomerListingRow>(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows.into_iter().map(row_to_listing).collect())
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<i32, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let row = NewCustomerRow {
            name: &customer.name,
            phone: &customer.phone,
            district_id: customer.district_id,
            department_id: customer.department_id,
        };

        diesel::insert_into(customers::table)
            .values(&row)
            .returning(customers::customer_id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_store_error)
    }

    async fn update(&self, customer_id: i32, patch: &CustomerPatch) -> Result<u64, StoreError> {
        // Diesel rejects an all-None changeset; an empty patch touches no rows.
        if patch.is_empty() {
            return Ok(0);
        }

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let changeset = CustomerChangeset {
            name: patch.name.as_deref(),
            phone: patch.phone.as_deref(),
            district_id: patch.district_id,
            department_id: patch.department_id,
        };

        let rows = diesel::update(customers::table.filter(customers::customer_id.eq(customer_id)))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows as u64)
    }

    async fn delete(&self, customer_id: i32) -> Result<u64, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let rows = diesel::delete(customers::table.filter(customers::customer_id.eq(customer_id)))
            .execute(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows as u64)
    }
}
