//! # Authentication
//!
//! The console supports a single static bearer token. The token field may be
//! filled with either the bare token or an already formed `Bearer <token>`
//! value.

pub const AUTHORIZATION: &str = "Authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// Builds the `Authorization` header value for the token field, or `None`
/// when the field is blank.
pub fn bearer_authorization(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if token.starts_with(BEARER_PREFIX) {
        Some(token.to_string())
    } else {
        Some(format!("{BEARER_PREFIX}{token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_yields_no_header() {
        assert_eq!(bearer_authorization(""), None);
        assert_eq!(bearer_authorization("   "), None);
    }

    #[test]
    fn bare_token_is_prefixed() {
        assert_eq!(bearer_authorization(" abc123 ").as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn prefixed_token_is_kept() {
        assert_eq!(bearer_authorization("Bearer abc123").as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert_eq!(
            bearer_authorization("bearer abc123").as_deref(),
            Some("Bearer bearer abc123")
        );
    }
}
