//! PostgreSQL-backed `UserRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{NewUser, StoredUser};

use super::error_mapping::{map_pool_error, map_user_store_error};
use super::models::{NewUserRow, UserCredentialsRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_stored_user(row: UserCredentialsRow) -> StoredUser {
    StoredUser {
        user_id: row.user_id,
        username: row.username,
        password_hash: row.password,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<i32, UserStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserStoreError::connection))?;

        let row = NewUserRow {
            name: &user.name,
            email: &user.email,
            phone: &user.phone,
            username: &user.username,
            password: &user.password_hash,
            role: &user.role,
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(users::user_id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_user_store_error)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, UserStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserStoreError::connection))?;

        let row = users::table
            .filter(users::username.eq(username))
            .select(UserCredentialsRow::as_select())
            .first::<UserCredentialsRow>(&mut conn)
            .await
            .optional()
            .map_err(map_user_store_error)?;

        Ok(row.map(row_to_stored_user))
    }
}
