//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AuthService;
use crate::domain::ports::{
    ComplaintRepository, CustomerRepository, ReferenceDataRepository, TokenIssuer,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub tokens: Arc<dyn TokenIssuer>,
    pub reference: Arc<dyn ReferenceDataRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub complaints: Arc<dyn ComplaintRepository>,
}

impl HttpState {
    pub fn new(
        auth: AuthService,
        tokens: Arc<dyn TokenIssuer>,
        reference: Arc<dyn ReferenceDataRepository>,
        customers: Arc<dyn CustomerRepository>,
        complaints: Arc<dyn ComplaintRepository>,
    ) -> Self {
        Self {
            auth,
            tokens,
            reference,
            customers,
            complaints,
        }
    }
}
