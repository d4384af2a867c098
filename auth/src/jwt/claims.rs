use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token lifetime. Policy constant, not caller-configurable.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by a session token.
///
/// Fixed shape: every field is required, so a token missing any of them
/// fails to decode instead of being silently defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated user's unique identifier
    pub sub: String,

    /// Email claim, informational only; never used for authorization
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, stamped with the fixed expiry window.
    pub fn new(subject: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            sub: subject.into(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// A token is expired at or after its expiry instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
