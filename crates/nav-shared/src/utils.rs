//! Utility functions

/// Normalize a destination or location path: trim surrounding whitespace and
/// strip a single trailing slash ("/leave/" and "/leave" compare equal).
/// The bare root "/" is left untouched.
pub fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_path("/leave/"), "/leave");
        assert_eq!(normalize_path(" /leave "), "/leave");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "");
    }
}
