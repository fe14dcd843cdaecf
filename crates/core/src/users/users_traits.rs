use crate::errors::Result;
use crate::users::users_model::{Credentials, NewUser, SignUp, User, UserProfile};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<User>;
    async fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for authentication operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn sign_up(&self, input: SignUp) -> Result<UserProfile>;
    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile>;
    fn sign_out(&self);
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
}
