//! Shared validation helpers for inbound HTTP adapters.

use crate::domain::Error;

/// Rejection for sparse create payloads; one message covers every field.
pub(crate) fn all_fields_required() -> Error {
    Error::invalid_request("All fields are required")
}

/// Treat empty and whitespace-only strings like absent fields.
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
