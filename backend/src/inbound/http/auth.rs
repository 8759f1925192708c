//! Signup and login API handlers.
//!
//! ```text
//! POST /api/signup {"name":..,"email":..,"phone":..,"username":..,"password":..,"role":..}
//! POST /api/login  {"username":..,"password":..}
//! ```
//!
//! These are the only endpoints reachable without a bearer token.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, SignupForm, SignupValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Signup request body. Fields default to absent so a sparse payload maps
/// to a 400, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl TryFrom<SignupRequest> for SignupForm {
    type Error = SignupValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref().unwrap_or_default(),
            value.email.as_deref().unwrap_or_default(),
            value.phone.as_deref().unwrap_or_default(),
            value.username.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
            value.role.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize)]
struct SignupResponse {
    message: &'static str,
    #[serde(rename = "userId")]
    user_id: i32,
}

/// Register a new account.
///
/// The password is hashed before it reaches the store; a duplicate
/// username answers 409 via the store's unique constraint.
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let form = SignupForm::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let user_id = state.auth.signup(&form).await?;
    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User signed up successfully",
        user_id,
    }))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    token: String,
}

/// Authenticate and mint a short-lived bearer token.
///
/// Unknown usernames and wrong passwords produce the same 401 body.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let token = state.auth.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
