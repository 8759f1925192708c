//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed DDL exactly; Diesel uses them
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered user accounts.
    users (user_id) {
        user_id -> Int4,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        /// Login name; carries a unique constraint.
        username -> Varchar,
        /// bcrypt PHC string, never plaintext.
        password -> Varchar,
        role -> Varchar,
    }
}

diesel::table! {
    /// Seeded geographic districts.
    districts (district_id) {
        district_id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Seeded organisational departments.
    departments (department_id) {
        department_id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Customers filing complaints.
    customers (customer_id) {
        customer_id -> Int4,
        name -> Varchar,
        phone -> Varchar,
        district_id -> Int4,
        department_id -> Int4,
    }
}

diesel::table! {
    /// Complaints; `created_at` defaults to now() and is never updated.
    complaints (complaint_id) {
        complaint_id -> Int4,
        subject -> Varchar,
        description -> Text,
        district_id -> Int4,
        department_id -> Int4,
        status -> Varchar,
        customer_id -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(customers -> districts (district_id));
diesel::joinable!(customers -> departments (department_id));
diesel::joinable!(complaints -> customers (customer_id));
diesel::joinable!(complaints -> districts (district_id));
diesel::joinable!(complaints -> departments (department_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    districts,
    departments,
    customers,
    complaints,
);
