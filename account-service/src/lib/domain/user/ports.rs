use async_trait::async_trait;

use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserCredentials;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for signup and login operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account: hash the password and persist the record.
    ///
    /// # Arguments
    /// * `command` - Validated command with email, password, region, balance
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Store rejected a duplicate email
    /// * `DatabaseError` - Store operation failed
    /// * `Unknown` - Password hashing failed
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError>;

    /// Verify credentials by email and issue a session token.
    ///
    /// # Arguments
    /// * `email` - Login email
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// Signed session token bound to the user's ID and email
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, failed lookup, or wrong
    ///   password; deliberately indistinguishable
    async fn login(&self, email: &str, password: &str) -> Result<String, UserError>;
}

/// Port for profile and balance operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve the authenticated user's profile.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError>;

    /// Set the user's balance to a new value.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_balance(&self, id: &UserId, balance: f64) -> Result<(), UserError>;

    /// Delete the user's account.
    ///
    /// Outstanding session tokens stay valid until they expire; there is
    /// no revocation.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_profile(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// Uniqueness enforcement, if any, is the store's responsibility.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Store rejected a duplicate email
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve the login projection for an email address.
    ///
    /// Secondary-index lookup returning at most one record.
    ///
    /// # Returns
    /// Optional credentials projection (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserError>;

    /// Overwrite the stored balance for a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_balance(&self, id: &UserId, balance: f64) -> Result<(), UserError>;

    /// Remove a user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
