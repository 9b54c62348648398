//! # Nav API
//!
//! HTTP handlers, port adapters, and per-session state for the navigation
//! service.

pub mod adapters;
pub mod handlers;
pub mod response;
pub mod state;
