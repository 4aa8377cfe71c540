//! Domain models and operation-specific parameter types.
//!
//! The service layer works with these types rather than DTOs or entity models.
//! Conversion happens at the boundaries: `from_entity` at the repository edge,
//! `into_*_dto` at the controller edge, and `from_dto` when a request payload
//! enters the service layer.

pub mod course;
pub mod group;
pub mod student;
