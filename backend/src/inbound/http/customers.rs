//! Customer API handlers.
//!
//! ```text
//! GET    /api/customers
//! POST   /api/customers
//! PUT    /api/customers/{id}
//! DELETE /api/customers/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{CustomerListing, CustomerPatch, NewCustomer};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{all_fields_required, provided};

#[get("/customers")]
pub async fn list_customers(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CustomerListing>>> {
    let customers = state.customers.list().await?;
    Ok(web::Json(customers))
}

/// Create request body; every field is required.
#[derive(Debug, Deserialize)]
pub struct CustomerCreateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub district_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<i32>,
}

#[derive(Debug, Serialize)]
struct CustomerCreated {
    customer_id: i32,
}

#[post("/customers")]
pub async fn create_customer(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CustomerCreateRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let (Some(name), Some(phone), Some(district_id), Some(department_id)) = (
        provided(payload.name.as_deref()),
        provided(payload.phone.as_deref()),
        payload.district_id,
        payload.department_id,
    ) else {
        return Err(all_fields_required());
    };

    let customer = NewCustomer {
        name: name.to_owned(),
        phone: phone.to_owned(),
        district_id,
        department_id,
    };
    let customer_id = state.customers.insert(&customer).await?;
    Ok(HttpResponse::Created().json(CustomerCreated { customer_id }))
}

/// Update request body; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub district_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<i32>,
}

impl From<CustomerUpdateRequest> for CustomerPatch {
    fn from(value: CustomerUpdateRequest) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            district_id: value.district_id,
            department_id: value.department_id,
        }
    }
}

#[put("/customers/{id}")]
pub async fn update_customer(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CustomerUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let customer_id = path.into_inner();
    let patch = CustomerPatch::from(payload.into_inner());
    // An empty patch is a no-op; answering success keeps retries harmless.
    if !patch.is_empty() {
        state.customers.update(customer_id, &patch).await?;
    }
    Ok(HttpResponse::Ok().body("Customer updated successfully"))
}

#[delete("/customers/{id}")]
pub async fn delete_customer(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let customer_id = path.into_inner();
    state.customers.delete(customer_id).await?;
    Ok(HttpResponse::Ok().body("Customer deleted successfully"))
}
