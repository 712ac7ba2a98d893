//! Environment lookups with defaults.

/// Environment variable holding the operator-supplied application name.
pub const APPLICATION_NAME: &str = "APPLICATION_NAME";

/// Fallback used when the application name is not configured.
pub const UNKNOWN_APPLICATION: &str = "unknown";

/// Read `key` from the process environment, returning `default` when the
/// variable is unset, empty, or not valid Unicode.
pub fn get_config(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_unset_falls_back() {
        assert_eq!(
            get_config("ROT13_TEST_SURELY_UNSET_VARIABLE", "unknown"),
            "unknown"
        );
    }

    #[test]
    fn test_set_value_is_returned() {
        std::env::set_var("ROT13_TEST_ENV_SET", "billing");
        assert_eq!(get_config("ROT13_TEST_ENV_SET", "unknown"), "billing");
    }

    #[test]
    fn test_empty_value_falls_back() {
        std::env::set_var("ROT13_TEST_ENV_EMPTY", "");
        assert_eq!(get_config("ROT13_TEST_ENV_EMPTY", "unknown"), "unknown");
    }
}
