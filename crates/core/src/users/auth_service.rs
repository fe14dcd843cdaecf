use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, Error as PasswordHashError, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;
use log::{debug, error};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::Result;
use crate::users::auth_errors::AuthError;
use crate::users::session::SessionContext;
use crate::users::users_model::{Credentials, NewUser, SignUp, UserProfile};
use crate::users::users_traits::{AuthServiceTrait, UserRepositoryTrait};

pub struct AuthService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    session: SessionContext,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>, session: SessionContext) -> Self {
        AuthService {
            user_repository,
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(format!("Failed to hash password: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify_password(candidate: &str, stored_hash: &str) -> Result<()> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {e}")))?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::IncorrectPassword,
                other => AuthError::Internal(format!("Password verification failed: {other}")),
            })?;
        Ok(())
    }

    /// Structural check only; 'taken' vs 'unknown' is decided against the store.
    fn is_valid_email(email: &str) -> bool {
        let mut parts = email.splitn(2, '@');
        match (parts.next(), parts.next()) {
            (Some(local), Some(domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            _ => false,
        }
    }

    fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn sign_up(&self, input: SignUp) -> Result<UserProfile> {
        let email = Self::normalize_email(&input.email);

        if !Self::is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }
        if input.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword.into());
        }
        if self.user_repository.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let display_name = if input.display_name.trim().is_empty() {
            "User".to_string()
        } else {
            input.display_name.trim().to_string()
        };

        let new_user = NewUser {
            email,
            display_name,
            password_hash: Self::hash_password(&input.password)?,
        };

        let user = self.user_repository.insert_new_user(new_user).await?;
        debug!("Created account {}", user.id);

        let profile = UserProfile::from(user);
        self.session.publish(Some(profile.clone()));
        Ok(profile)
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile> {
        let email = Self::normalize_email(&credentials.email);

        let user = match self.user_repository.find_by_email(&email)? {
            Some(user) => user,
            None => return Err(AuthError::AccountNotFound.into()),
        };

        if let Err(e) = Self::verify_password(&credentials.password, &user.password_hash) {
            if !matches!(
                e,
                crate::errors::Error::Auth(AuthError::IncorrectPassword)
            ) {
                error!("Password verification failed for {}: {e}", user.id);
            }
            return Err(e);
        }

        let profile = UserProfile::from(user);
        self.session.publish(Some(profile.clone()));
        Ok(profile)
    }

    fn sign_out(&self) {
        self.session.publish(None);
    }

    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        let user = self.user_repository.find_by_id(user_id)?;
        Ok(UserProfile::from(user))
    }
}
