use once_cell::sync::Lazy;
use regex::Regex;

/// Username rules: alphanumeric, underscore, dot, hyphen, 1-30 chars
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.-]{1,30}$").unwrap());
