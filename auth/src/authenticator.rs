use crate::jwt::extract_bearer;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and session
/// token handling.
///
/// Every operation is stateless apart from reads of the immutable signing
/// secret, so a single instance serves any number of concurrent requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing, injected per process
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and issue a session token
    /// bound to the subject and email claims.
    ///
    /// A non-matching password and an unreadable stored hash are the same
    /// `InvalidCredentials` outcome.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject, email)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a session token without password verification.
    ///
    /// Useful when authentication has already been established by other
    /// means.
    ///
    /// # Errors
    /// * `JwtError` - Token issuance failed
    pub fn issue_token(&self, subject: &str, email: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject, email)
    }

    /// Validate and decode a session token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Extract the bearer token from an Authorization header value and
    /// validate it.
    ///
    /// The composition applied by every protected route: any failure
    /// short-circuits to a rejection before business logic runs.
    ///
    /// # Errors
    /// * `MalformedHeader` - Header absent or not a bearer credential
    /// * `JwtError` - Token validation or decoding failed
    pub fn authorize(&self, authorization: Option<&str>) -> Result<Claims, JwtError> {
        let token = extract_bearer(authorization)?;
        self.validate_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "user@example.com")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result =
            authenticator.authenticate("wrong_password", &hash, "user123", "user@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unreadable_stored_hash() {
        let authenticator = Authenticator::new(SECRET);

        // Same outcome as a wrong password, not a distinct error.
        let result = authenticator.authenticate(
            "my_password",
            "corrupted-hash",
            "user123",
            "user@example.com",
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authorize_bearer_header() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .issue_token("user123", "user@example.com")
            .expect("Failed to issue token");
        let header = format!("Bearer {}", token);

        let claims = authenticator
            .authorize(Some(&header))
            .expect("Authorization failed");
        assert_eq!(claims.sub, "user123");
    }

    #[test]
    fn test_authorize_rejects_missing_header() {
        let authenticator = Authenticator::new(SECRET);

        assert_eq!(authenticator.authorize(None), Err(JwtError::MalformedHeader));
    }

    #[test]
    fn test_authorize_rejects_raw_token_without_scheme() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .issue_token("user123", "user@example.com")
            .expect("Failed to issue token");

        assert_eq!(
            authenticator.authorize(Some(&token)),
            Err(JwtError::MalformedHeader)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
