//! Complaint data model and status lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resolution state of a complaint.
///
/// The observed workflow only ever moves `Pending` → `Resolved`; the store
/// layer accepts either value so re-applying `Resolved` stays idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

impl ComplaintStatus {
    /// Canonical string stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not a known value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status must be Pending or Resolved, got {:?}", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

impl FromStr for ComplaintStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Resolved" => Ok(Self::Resolved),
            other => Err(InvalidStatus(other.to_owned())),
        }
    }
}

/// Payload for filing a complaint. Every field is required at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub subject: String,
    pub description: String,
    pub district_id: i32,
    pub department_id: i32,
    pub status: ComplaintStatus,
    pub customer_id: i32,
}

/// A complaint row joined with customer, district, and department names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintListing {
    pub complaint_id: i32,
    pub subject: String,
    pub description: String,
    pub customer_name: Option<String>,
    pub district: Option<String>,
    pub department: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
