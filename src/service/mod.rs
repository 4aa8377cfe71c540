//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Business rules**: or-404 / or-400 lookups, payload validation, and the
//!   course-membership rules for student updates
//! - **Orchestration**: coordinating multiple repository calls
//! - **Domain models**: working with domain models rather than DTOs or entities
//! - **Transactions**: multi-step mutations run inside one transaction that is
//!   committed on success and rolled back on error
//!
//! Validation never inspects the HTTP verb; controllers pass the explicit
//! `Operation::{Create, Update}` tag through the parameter types instead.

pub mod course;
pub mod group;
pub mod student;
