//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each entity in the application. Repositories use SeaORM entity models internally and
//! return domain models at the boundary to keep the data layer separate from business
//! logic. They are generic over `ConnectionTrait` so the service layer can run the same
//! operations on the pooled connection or inside a transaction.

pub mod course;
pub mod group;
pub mod student;

#[cfg(test)]
mod test;
