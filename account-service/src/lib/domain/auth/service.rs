use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service for signup and login.
///
/// Pure orchestrator over the injected user store and the authentication
/// library; holds no mutable state, so concurrent requests need no
/// coordination.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<auth::Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<auth::Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            region: command.region,
            balance: command.balance,
            password_hash,
            created_at: Utc::now(),
        };

        // No pre-insert uniqueness check: duplicate emails are caught only
        // if the store enforces them. Store errors propagate verbatim.
        self.repository.create(user).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        // Unknown email and failed lookup collapse into the same rejection
        // as a wrong password, so responses don't reveal which emails exist.
        let credentials = match self.repository.find_credentials_by_email(email).await {
            Ok(Some(credentials)) => credentials,
            Ok(None) => return Err(UserError::InvalidCredentials),
            Err(e) => {
                tracing::warn!("Credential lookup failed during login: {}", e);
                return Err(UserError::InvalidCredentials);
            }
        };

        let result = self
            .authenticator
            .authenticate(
                password,
                &credentials.password_hash,
                &credentials.id.to_string(),
                credentials.email.as_str(),
            )
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                e => UserError::Unknown(format!("Token issuance failed: {}", e)),
            })?;

        Ok(result.access_token)
    }
}
