//! Request and response DTOs for the REST API.
//!
//! Each entity has two response projections: a short shape with identity and
//! display fields only, and a full shape adding every column plus nested short
//! projections of related entities. Payload DTOs carry create/update input;
//! the entity id itself always comes from the request path, never the body.

pub mod api;
pub mod course;
pub mod group;
pub mod student;
