//! # Nav Core - Ports
//!
//! Traits for the external collaborators: the identity provider that knows
//! the acting user, and the router that owns the current location.

pub mod identity;
pub mod router;

pub use identity::{IdentityError, IdentityProvider};
pub use router::RouteDispatcher;
