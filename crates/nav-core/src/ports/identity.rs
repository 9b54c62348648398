//! Identity provider port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Role;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Logout rejected: {0}")]
    LogoutRejected(String),

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the acting user's role and handles session termination. The
/// engine never sees credentials or tokens; an unknown user shows up as
/// `current_role() == None` and is treated as role-free.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn current_role(&self) -> Option<Role>;
    fn display_name(&self) -> Option<String>;
    async fn logout(&self) -> Result<(), IdentityError>;
}
