//! Router/location port

/// Owns the current location and performs navigation. `navigate` is
/// fire-and-forget: the controller never blocks on it or retries it.
#[cfg_attr(test, mockall::automock)]
pub trait RouteDispatcher: Send + Sync {
    fn current_location(&self) -> String;
    fn navigate(&self, path: &str);
}
