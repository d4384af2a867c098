//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Session token issuance and validation (HS256 JWT)
//! - Bearer-header extraction
//! - Authentication coordination
//!
//! The signing secret is injected at construction time, never read from a
//! global, so each environment can carry its own key and tests can use
//! deterministic secrets.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue("user123", "user@example.com").unwrap();
//! let claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", "user@example.com")
//!     .unwrap();
//!
//! // Protected request: extract the bearer token and validate it
//! let header = format!("Bearer {}", result.access_token);
//! let claims = auth.authorize(Some(&header)).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::extract_bearer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
