use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Checks the `local@domain.tld` shape only. Anything stricter is left to a real backend.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Password length is counted in characters, not bytes.
pub fn is_valid_password(password: &str, min_len: usize) -> bool {
    !password.is_empty() && password.chars().count() >= min_len
}
