//! Shared store failure type for the thin CRUD repositories.

use crate::domain::Error;

use super::macros::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum StoreError {
        /// A pooled connection could not be checked out.
        Connection { message: String } => "store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "store query failed: {message}",
    }
}

impl From<StoreError> for Error {
    /// Collapse any store fault into a generic internal error.
    ///
    /// Detail stays in the server-side logs (the adapter logs it before
    /// returning); the client only ever sees the redacted message.
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Connection { message } | StoreError::Query { message } => {
                Error::internal(message)
            }
        }
    }
}
