use super::errors::JwtError;

/// Scheme prefix required on the Authorization header, trailing space included.
const BEARER_PREFIX: &str = "Bearer ";

/// Extract the raw token from an Authorization header value.
///
/// The header must be present and carry the literal `Bearer ` prefix.
/// An absent header, a value shorter than the prefix, or any other scheme
/// (including case variants) is rejected without looking at the token.
///
/// # Errors
/// * `MalformedHeader` - Header absent or not a bearer credential
pub fn extract_bearer(header: Option<&str>) -> Result<&str, JwtError> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(JwtError::MalformedHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(None), Err(JwtError::MalformedHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            extract_bearer(Some("Basic dXNlcjpwYXNz")),
            Err(JwtError::MalformedHeader)
        );
    }

    #[test]
    fn test_header_shorter_than_prefix() {
        assert_eq!(extract_bearer(Some("Bear")), Err(JwtError::MalformedHeader));
        assert_eq!(extract_bearer(Some("")), Err(JwtError::MalformedHeader));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(
            extract_bearer(Some("bearer abc.def.ghi")),
            Err(JwtError::MalformedHeader)
        );
    }

    #[test]
    fn test_missing_space_after_scheme() {
        assert_eq!(
            extract_bearer(Some("Bearerabc.def.ghi")),
            Err(JwtError::MalformedHeader)
        );
    }
}
