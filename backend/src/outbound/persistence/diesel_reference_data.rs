//! PostgreSQL-backed `ReferenceDataRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ReferenceDataRepository, StoreError};
use crate::domain::{Department, District};

use super::error_mapping::{map_pool_error, map_store_error};
use super::pool::DbPool;
use super::schema::{departments, districts};

/// Diesel-backed implementation of the `ReferenceDataRepository` port.
#[derive(Clone)]
pub struct DieselReferenceDataRepository {
    pool: DbPool,
}

impl DieselReferenceDataRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceDataRepository for DieselReferenceDataRepository {
    async fn list_districts(&self) -> Result<Vec<District>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let rows = districts::table
            .select((districts::district_id, districts::name))
            .load::<(i32, String)>(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows
            .into_iter()
            .map(|(district_id, name)| District { district_id, name })
            .collect())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, StoreError::connection))?;

        let rows = departments::table
            .select((departments::department_id, departments::name))
            .load::<(i32, String)>(&mut conn)
            .await
            .map_err(map_store_error)?;

        Ok(rows
            .into_iter()
            .map(|(department_id, name)| Department {
                department_id,
                name,
            })
            .collect())
    }
}
