//! # Nav Core - Services
//!
//! Pure filtering/matching functions and the navigation controller that
//! composes them per render pass.

pub mod role_filter;
pub mod route_matcher;
pub mod navigation;

pub use navigation::{MenuEntry, NavigationController};
