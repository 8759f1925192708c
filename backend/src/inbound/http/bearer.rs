//! Bearer-token request guard.
//!
//! `AuthenticatedUser` is an extractor: adding it to a handler signature
//! makes the endpoint require a valid `Authorization: Bearer <token>`
//! header. Signup and login are the only resource endpoints without it.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use crate::domain::Error;
use crate::domain::ports::{TokenClaims, TokenError};
use crate::inbound::http::state::HttpState;

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    claims: TokenClaims,
}

impl AuthenticatedUser {
    /// Numeric id of the authenticated user.
    pub fn user_id(&self) -> i32 {
        self.claims.user_id
    }

    /// Username embedded in the token at issuance.
    pub fn username(&self) -> &str {
        &self.claims.username
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, Error> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("Authorization token required"))?;
    let raw = header_value
        .to_str()
        .map_err(|_| Error::unauthorized("Authorization token required"))?;
    raw.strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::unauthorized("Authorization token required"))
}

fn verify(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let token = bearer_token(req)?;
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HttpState missing from app data"))?;
    let claims = state.tokens.verify(token).map_err(|err| match err {
        TokenError::Invalid | TokenError::Expired => Error::unauthorized(err.to_string()),
        TokenError::Mint { message } => Error::internal(message),
    })?;
    Ok(AuthenticatedUser { claims })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(verify(req))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::TokenIssuer;
    use crate::inbound::http::test_support::{stub_state, test_issuer};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(format!("{}:{}", user.user_id(), user.username()))
    }

    #[actix_web::test]
    async fn accepts_a_freshly_minted_token() {
        let state = stub_state();
        let token = test_issuer().issue(7, "asha").expect("token mints");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, "7:asha");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Bearer "))]
    #[case(Some("Token abc"))]
    #[case(Some("Bearer not.a.jwt"))]
    #[actix_web::test]
    async fn rejects_missing_or_malformed_headers(#[case] header_value: Option<&str>) {
        let state = stub_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/whoami");
        if let Some(value) = header_value {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }
}
