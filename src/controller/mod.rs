//! HTTP request handlers.
//!
//! Controllers parse request parameters, convert payload DTOs into parameter
//! models, call the service layer, and convert the resulting domain models into
//! the projection the caller asked for. Every handler carries a `#[utoipa::path]`
//! annotation so the OpenAPI document is generated from the same declarations.

pub mod course;
pub mod group;
pub mod student;

use serde::Deserialize;

/// Query parameters shared by every GET endpoint.
///
/// `?full=true` selects the full projection; the default is the short one.
#[derive(Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub full: bool,
}
