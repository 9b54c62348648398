//! Application-wide constants

/// Default landing destination; matched exactly, never as a prefix.
pub const DEFAULT_ROOT_PATH: &str = "/dashboard";

/// Destination the controller dispatches to after a logout request.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

pub const MAX_MENU_DEPTH: usize = 5;
pub const MAX_LABEL_LENGTH: usize = 100;
pub const MAX_PATH_LENGTH: usize = 255;
