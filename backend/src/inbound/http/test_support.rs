//! In-memory stubs and fixtures shared by handler tests.

use std::sync::{Arc, Mutex};

use actix_web::http::header;
use actix_web::test::TestRequest;
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    ComplaintRepository, CustomerRepository, ReferenceDataRepository, StoreError, TokenIssuer,
    UserRepository, UserStoreError,
};
use crate::domain::{
    AuthService, ComplaintListing, ComplaintStatus, CustomerListing, CustomerPatch, Department,
    District, NewComplaint, NewCustomer, NewUser, StoredUser,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenIssuer};

const TEST_SECRET: &str = "handler-test-secret";

pub(crate) fn test_issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(TEST_SECRET)
}

/// Attach a valid bearer token for a fixed test identity.
pub(crate) fn authorized(req: TestRequest) -> TestRequest {
    let token = test_issuer().issue(1, "asha").expect("test token mints");
    req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
}

fn district_name(id: i32) -> Option<String> {
    match id {
        1 => Some("Colombo".to_owned()),
        2 => Some("Kandy".to_owned()),
        _ => None,
    }
}

fn department_name(id: i32) -> Option<String> {
    match id {
        1 => Some("Billing".to_owned()),
        2 => Some("Sales".to_owned()),
        _ => None,
    }
}

#[derive(Default)]
pub(crate) struct StubUsers {
    state: Mutex<(Vec<StoredUser>, i32)>,
}

#[async_trait]
impl UserRepository for StubUsers {
    async fn insert(&self, user: &NewUser) -> Result<i32, UserStoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        if state.0.iter().any(|u| u.username == user.username) {
            return Err(UserStoreError::duplicate_username());
        }
        state.1 += 1;
        let id = state.1;
        state.0.push(StoredUser {
            user_id: id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
        });
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, UserStoreError> {
        let state = self.state.lock().expect("stub state poisoned");
        Ok(state.0.iter().find(|u| u.username == username).cloned())
    }
}

pub(crate) struct StubReference;

#[async_trait]
impl ReferenceDataRepository for StubReference {
    async fn list_districts(&self) -> Result<Vec<District>, StoreError> {
        Ok(vec![
            District {
                district_id: 1,
                name: "Colombo".to_owned(),
            },
            District {
                district_id: 2,
                name: "Kandy".to_owned(),
            },
        ])
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(vec![
            Department {
                department_id: 1,
                name: "Billing".to_owned(),
            },
            Department {
                department_id: 2,
                name: "Sales".to_owned(),
            },
        ])
    }
}

struct CustomerRow {
    customer_id: i32,
    name: String,
    phone: String,
    district_id: i32,
    department_id: i32,
}

#[derive(Default)]
pub(crate) struct StubCustomers {
    state: Mutex<(Vec<CustomerRow>, i32)>,
}

#[async_trait]
impl CustomerRepository for StubCustomers {
    async fn list(&self) -> Result<Vec<CustomerListing>, StoreError> {
        let state = self.state.lock().expect("stub state poisoned");
        Ok(state
            .0
            .iter()
            .map(|row| CustomerListing {
                customer_id: row.customer_id,
                name: row.name.clone(),
                phone: row.phone.clone(),
                district: district_name(row.district_id),
                department: department_name(row.department_id),
            })
            .collect())
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<i32, StoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        state.1 += 1;
        let id = state.1;
        state.0.push(CustomerRow {
            customer_id: id,
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            district_id: customer.district_id,
            department_id: customer.department_id,
        });
        Ok(id)
    }

    async fn update(&self, customer_id: i32, patch: &CustomerPatch) -> Result<u64, StoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        let Some(row) = state.0.iter_mut().find(|row| row.customer_id == customer_id) else {
            return Ok(0);
        };
        if let Some(name) = &patch.name {
            row.name = name.clone();
        }
        if let Some(phone) = &patch.phone {
            row.phone = phone.clone();
        }
        if let Some(district_id) = patch.district_id {
            row.district_id = district_id;
        }
        if let Some(department_id) = patch.department_id {
            row.department_id = department_id;
        }
        Ok(1)
    }

    async fn delete(&self, customer_id: i32) -> Result<u64, StoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        let before = state.0.len();
        state.0.retain(|row| row.customer_id != customer_id);
        Ok((before - state.0.len()) as u64)
    }
}

struct ComplaintRow {
    complaint_id: i32,
    complaint: NewComplaint,
    status: ComplaintStatus,
    created_at: chrono::DateTime<Utc>,
}

#[derive(Default)]
pub(crate) struct StubComplaints {
    state: Mutex<(Vec<ComplaintRow>, i32)>,
}

#[async_trait]
impl ComplaintRepository for StubComplaints {
    async fn list(&self) -> Result<Vec<ComplaintListing>, StoreError> {
        let state = self.state.lock().expect("stub state poisoned");
        Ok(state
            .0
            .iter()
            .map(|row| ComplaintListing {
                complaint_id: row.complaint_id,
                subject: row.complaint.subject.clone(),
                description: row.complaint.description.clone(),
                customer_name: Some(format!("customer-{}", row.complaint.customer_id)),
                district: district_name(row.complaint.district_id),
                department: department_name(row.complaint.department_id),
                status: row.status.as_str().to_owned(),
                created_at: row.created_at,
            })
            .collect())
    }

    async fn insert(&self, complaint: &NewComplaint) -> Result<i32, StoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        state.1 += 1;
        let id = state.1;
        state.0.push(ComplaintRow {
            complaint_id: id,
            complaint: complaint.clone(),
            status: complaint.status,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn set_status(
        &self,
        complaint_id: i32,
        status: ComplaintStatus,
    ) -> Result<u64, StoreError> {
        let mut state = self.state.lock().expect("stub state poisoned");
        let Some(row) = state
            .0
            .iter_mut()
            .find(|row| row.complaint_id == complaint_id)
        else {
            return Ok(0);
        };
        row.status = status;
        Ok(1)
    }
}

/// Fully wired state over in-memory stubs and a fast bcrypt cost.
pub(crate) fn stub_state() -> HttpState {
    let tokens = Arc::new(test_issuer());
    let auth = AuthService::new(
        Arc::new(StubUsers::default()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        tokens.clone(),
    );
    HttpState::new(
        auth,
        tokens,
        Arc::new(StubReference),
        Arc::new(StubCustomers::default()),
        Arc::new(StubComplaints::default()),
    )
}
