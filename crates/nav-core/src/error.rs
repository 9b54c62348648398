//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate destination id: {0}")]
    DuplicateDestinationId(String),

    #[error("Destination {0} declares an empty allowed-roles set")]
    EmptyAllowedRoles(String),

    #[error("Menu tree exceeds maximum depth of {max} at destination {id}")]
    MenuTooDeep { id: String, max: usize },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
