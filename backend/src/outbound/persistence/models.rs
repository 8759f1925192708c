//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements.

use diesel::prelude::*;

use super::schema::{complaints, customers, users};

/// Columns read when authenticating a login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserCredentialsRow {
    pub user_id: i32,
    pub username: String,
    pub password: String,
}

/// Insertable struct for signup.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Insertable struct for creating a customer.
#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub(crate) struct NewCustomerRow<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub district_id: i32,
    pub department_id: i32,
}

/// Changeset for partial customer updates; `None` fields are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = customers)]
pub(crate) struct CustomerChangeset<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub district_id: Option<i32>,
    pub department_id: Option<i32>,
}

/// Insertable struct for filing a complaint.
///
/// `created_at` is omitted so the column default stamps the insert.
#[derive(Debug, Insertable)]
#[diesel(table_name = complaints)]
pub(crate) struct NewComplaintRow<'a> {
    pub subject: &'a str,
    pub description: &'a str,
    pub district_id: i32,
    pub department_id: i32,
    pub status: &'a str,
    pub customer_id: i32,
}
