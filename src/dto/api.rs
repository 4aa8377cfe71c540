use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success body returned by every mutating endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Human-readable outcome, e.g. "Student with id '5' has been successfully added".
    pub message: String,
}

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Error class name: ValidationError, NotFound, Conflict, IntegrityError or InternalError.
    pub error: String,
    /// Detail message for the failure.
    pub message: String,
}
