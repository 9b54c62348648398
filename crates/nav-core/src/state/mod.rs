//! # Nav Core - Interaction State
//!
//! Session-scoped, in-memory state for the navigation surface. Created when
//! the surface mounts, discarded when it unmounts; never persisted.

pub mod expansion;
pub mod layout;

pub use expansion::ExpansionState;
pub use layout::LayoutMode;
