//! Customer data model.

use serde::{Deserialize, Serialize};

/// Payload for creating a customer. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub district_id: i32,
    pub department_id: i32,
}

/// Partial update for an existing customer.
///
/// `None` fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district_id: Option<i32>,
    pub department_id: Option<i32>,
}

impl CustomerPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.district_id.is_none()
            && self.department_id.is_none()
    }
}

/// A customer row joined with its district and department names.
///
/// The joins are LEFT JOINs so a dangling reference surfaces as `None`
/// rather than dropping the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerListing {
    pub customer_id: i32,
    pub name: String,
    pub phone: String,
    pub district: Option<String>,
    pub department: Option<String>,
}
