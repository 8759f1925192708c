//! District and department lookup handlers.
//!
//! ```text
//! GET /api/districts
//! GET /api/departments
//! ```
//!
//! Both tables are seeded reference data; the API only ever reads them.

use actix_web::{get, web};

use crate::domain::{Department, District};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::AuthenticatedUser;
use crate::inbound::http::state::HttpState;

#[get("/districts")]
pub async fn list_districts(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<District>>> {
    let districts = state.reference.list_districts().await?;
    Ok(web::Json(districts))
}

#[get("/departments")]
pub async fn list_departments(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Department>>> {
    let departments = state.reference.list_departments().await?;
    Ok(web::Json(departments))
}
