//! # Nav Core
//!
//! Domain entities, pure services, interaction state, and collaborator ports
//! for the StaffHub role-aware navigation engine.

pub mod domain;
pub mod services;
pub mod state;
pub mod ports;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
