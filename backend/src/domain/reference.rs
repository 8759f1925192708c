//! Fixed reference entities: districts and departments.
//!
//! Both are externally seeded lookup tables; the application only ever
//! reads them and references their identifiers from customers and
//! complaints.

use serde::{Deserialize, Serialize};

/// Geographic district a customer or complaint belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub district_id: i32,
    pub name: String,
}

/// Organisational department a customer or complaint is routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
}
