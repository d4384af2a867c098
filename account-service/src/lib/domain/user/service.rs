use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for profile and balance operations.
///
/// The caller's identity comes from a validated token subject; this
/// service never re-checks credentials.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_balance(&self, id: &UserId, balance: f64) -> Result<(), UserError> {
        self.repository.update_balance(id, balance).await
    }

    async fn delete_profile(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserCredentials;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>, UserError>;
            async fn update_balance(&self, id: &UserId, balance: f64) -> Result<(), UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn make_user(id: UserId) -> User {
        User {
            id,
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            region: "US".to_string(),
            balance: 10.0,
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_profile_success() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        let user = make_user(user_id);
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let profile = service.get_profile(&user_id).await.expect("Lookup failed");
        assert_eq!(profile.id, user_id);
        assert_eq!(profile.region, "US");
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_profile(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_balance() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_update_balance()
            .withf(move |id, balance| *id == user_id && *balance == 42.5)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let result = service.update_balance(&user_id, 42.5).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_profile_not_found() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(UserError::NotFound(user_id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_profile(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
