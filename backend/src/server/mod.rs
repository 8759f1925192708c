//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::{AuthService, Error};
use crate::inbound::http::auth::{login, signup};
use crate::inbound::http::complaints::{create_complaint, list_complaints, update_complaint_status};
use crate::inbound::http::customers::{
    create_customer, delete_customer, list_customers, update_customer,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::reference::{list_departments, list_districts};
use crate::inbound::http::state::HttpState;
use crate::middleware::RequestId;
use crate::outbound::persistence::{
    DbPool, DieselComplaintRepository, DieselCustomerRepository, DieselReferenceDataRepository,
    DieselUserRepository,
};
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenIssuer};

/// Wire the Diesel adapters and security services into handler state.
#[must_use]
pub fn build_http_state(pool: DbPool, jwt_secret: &str) -> HttpState {
    let tokens = Arc::new(JwtTokenIssuer::new(jwt_secret));
    let auth = AuthService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::new()),
        tokens.clone(),
    );
    HttpState::new(
        auth,
        tokens,
        Arc::new(DieselReferenceDataRepository::new(pool.clone())),
        Arc::new(DieselCustomerRepository::new(pool.clone())),
        Arc::new(DieselComplaintRepository::new(pool)),
    )
}

/// Malformed JSON answers 400 with the standard error envelope instead of
/// Actix's default plain-text body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Assemble the application: middleware, the `/api` scope, health probes.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .app_data(json_config())
        .service(signup)
        .service(login)
        .service(list_districts)
        .service(list_departments)
        .service(list_customers)
        .service(create_customer)
        .service(update_customer)
        .service(delete_customer)
        .service(list_complaints)
        .service(create_complaint)
        .service(update_complaint_status);

    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(RequestId)
        .service(api)
        .service(ready)
        .service(live)
}

/// Bind the HTTP server and hand back the shared health state so the
/// caller can flip readiness once startup completes.
pub fn create_server(
    config: &ServerConfig,
    http_state: HttpState,
) -> std::io::Result<(Server, web::Data<HealthState>)> {
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(http_state);
    let app_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(http_state.clone(), app_health_state.clone()))
        .bind(config.bind_addr())?
        .run();

    Ok((server, health_state))
}
