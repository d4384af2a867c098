use thiserror::Error;

/// Error type for session token operations.
///
/// Callers gating requests treat every decode-side variant as a single
/// unauthorized outcome; the distinction exists for diagnostics and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Authorization header is missing or not a bearer credential")]
    MalformedHeader,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
