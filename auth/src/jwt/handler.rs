use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signs and verifies session tokens.
///
/// Uses HS256 (HMAC with SHA-256); the serialized token is the compact
/// three-part base64url form. The signing secret is injected at
/// construction time and shared by every issue/validate operation.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token bound to a subject and email claim.
    ///
    /// Claims are stamped with the fixed 24-hour expiry window.
    ///
    /// # Errors
    /// * `SigningFailed` - Internal signing failure
    pub fn issue(&self, subject: &str, email: &str) -> Result<String, JwtError> {
        self.encode(&Claims::new(subject, email))
    }

    /// Sign caller-supplied claims into a token.
    ///
    /// # Errors
    /// * `SigningFailed` - Internal signing failure
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is recomputed over header+payload; any mismatch is
    /// rejected before the payload is trusted. A token whose expiry is at
    /// or before the current instant is rejected as expired.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify against the secret
    /// * `Malformed` - Token structure or claims cannot be decoded
    /// * `Expired` - Token expiry is at or before the current time
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is enforced below with an exact at-or-before comparison
        // instead of the library's leeway-based check.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            }
        })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}
