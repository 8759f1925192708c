//! Complaint API handlers.
//!
//! ```text
//! GET  /api/complaints
//! POST /api/complaints
//! PUT  /api/complaints/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{ComplaintListing, ComplaintStatus, Error, NewComplaint};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{all_fields_required, provided};

#[get("/complaints")]
pub async fn list_complaints(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ComplaintListing>>> {
    let complaints = state.complaints.list().await?;
    Ok(web::Json(complaints))
}

/// Create request body; every field is required.
#[derive(Debug, Deserialize)]
pub struct ComplaintCreateRequest {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub district_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_id: Option<i32>,
}

#[derive(Debug, Serialize)]
struct ComplaintCreated {
    complaint_id: i32,
    message: &'static str,
}

#[post("/complaints")]
pub async fn create_complaint(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    payload: web::Json<ComplaintCreateRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let (
        Some(subject),
        Some(description),
        Some(district_id),
        Some(department_id),
        Some(status),
        Some(customer_id),
    ) = (
        provided(payload.subject.as_deref()),
        provided(payload.description.as_deref()),
        payload.district_id,
        payload.department_id,
        provided(payload.status.as_deref()),
        payload.customer_id,
    )
    else {
        return Err(all_fields_required());
    };
    let status: ComplaintStatus = status
        .parse()
        .map_err(|err: crate::domain::InvalidStatus| Error::invalid_request(err.to_string()))?;

    let complaint = NewComplaint {
        subject: subject.to_owned(),
        description: description.to_owned(),
        district_id,
        department_id,
        status,
        customer_id,
    };
    let complaint_id = state.complaints.insert(&complaint).await?;
    Ok(HttpResponse::Created().json(ComplaintCreated {
        complaint_id,
        message: "Complaint added successfully",
    }))
}

/// Status update body for `PUT /api/complaints/{id}`.
#[derive(Debug, Deserialize)]
pub struct ComplaintStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComplaintStatusUpdated {
    message: &'static str,
}

/// Overwrite a complaint's status.
///
/// Re-applying the current status is accepted and changes nothing.
#[put("/complaints/{id}")]
pub async fn update_complaint_status(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ComplaintStatusRequest>,
) -> ApiResult<HttpResponse> {
    let complaint_id = path.into_inner();
    let status: ComplaintStatus = payload
        .status
        .as_deref()
        .ok_or_else(|| Error::invalid_request("status is required"))?
        .parse()
        .map_err(|err: crate::domain::InvalidStatus| Error::invalid_request(err.to_string()))?;

    state.complaints.set_status(complaint_id, status).await?;
    Ok(HttpResponse::Ok().json(ComplaintStatusUpdated {
        message: "Complaint status updated successfully",
    }))
}
