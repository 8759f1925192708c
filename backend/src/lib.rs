//! Customer-complaint tracking backend.
//!
//! REST API over PostgreSQL: signup/login issue short-lived bearer tokens,
//! and token-guarded endpoints manage districts, departments, customers,
//! and complaints.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
