//! # Nav Core - Domain Module
//!
//! Domain entities for the navigation engine.

pub mod role;
pub mod destination;
pub mod catalog;

// Re-export all entities and enums
pub use role::Role;
pub use destination::{Destination, IconRef};
pub use catalog::{default_catalog, MenuCatalog};
