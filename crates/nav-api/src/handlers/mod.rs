//! # Nav API - Handlers

pub mod health;
pub mod nav;
pub mod session;
