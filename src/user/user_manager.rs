use super::{
    user_models::{NewUserProfile, UserAccountView, UserId},
    AuthToken, AuthTokenValue, User, UserProfile, UserStore, UsernamePasswordCredentials,
};
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use std::time::{Duration, SystemTime};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_AUTH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Error)]
pub enum UserError {
    #[error("All fields required")]
    MissingFields,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Profile name required")]
    MissingProfileName,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type UserResult<T> = std::result::Result<T, UserError>;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct UserManager {
    user_store: Box<dyn UserStore>,
    auth_token_ttl: Duration,
}

impl UserManager {
    pub fn new(user_store: Box<dyn UserStore>, auth_token_ttl: Duration) -> Self {
        Self {
            user_store,
            auth_token_ttl,
        }
    }

    pub fn auth_token_ttl(&self) -> Duration {
        self.auth_token_ttl
    }

    /// Creates an account with password credentials, no session.
    pub fn add_user(&self, name: &str, email: &str, password: &str) -> UserResult<User> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UserError::MissingFields);
        }
        if self.user_store.get_user_by_email(email)?.is_some() {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            created_at: now_rfc3339(),
        };
        let credentials = UsernamePasswordCredentials::create(user.id.clone(), password)?;
        if let Err(err) = self.user_store.create_user(&user) {
            // Lost a race against a signup with the same email.
            if self.user_store.get_user_by_email(email)?.is_some() {
                return Err(UserError::EmailAlreadyRegistered);
            }
            return Err(err.into());
        }
        if let Err(err) = self.user_store.set_user_password_credentials(&credentials) {
            // Leave no account behind that nobody can sign into.
            if let Err(rollback_err) = self.user_store.delete_user(&user.id) {
                warn!(
                    "Failed to remove user {} without credentials: {:#}",
                    user.id, rollback_err
                );
            }
            return Err(err.into());
        }
        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> UserResult<(User, AuthToken)> {
        let user = self.add_user(name, email, password)?;
        let token = self.generate_auth_token(&user.id)?;
        Ok((user, token))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> UserResult<(User, AuthToken)> {
        let user = self
            .user_store
            .get_user_by_email(email)?
            .ok_or(UserError::InvalidCredentials)?;
        let credentials = self
            .user_store
            .get_user_password_credentials(&user.id)?
            .ok_or(UserError::InvalidCredentials)?;

        let verified = credentials.verify(password)?;
        self.user_store
            .record_password_attempt(&user.id, verified)?;
        if !verified {
            debug!("Wrong password for user {}", user.id);
            return Err(UserError::InvalidCredentials);
        }

        let token = self.generate_auth_token(&user.id)?;
        Ok((user, token))
    }

    fn generate_auth_token(&self, user_id: &str) -> UserResult<AuthToken> {
        let token = AuthToken {
            user_id: user_id.to_owned(),
            value: AuthTokenValue::generate(),
            created: SystemTime::now(),
            last_used: None,
        };
        self.user_store.add_user_auth_token(&token)?;
        Ok(token)
    }

    /// Looks up a live session. Expired tokens are deleted on sight.
    pub fn get_auth_token(&self, value: &AuthTokenValue) -> UserResult<Option<AuthToken>> {
        let token = match self.user_store.get_user_auth_token(value)? {
            Some(token) => token,
            None => return Ok(None),
        };
        if token.is_expired(self.auth_token_ttl, SystemTime::now()) {
            debug!("Auth token of user {} expired", token.user_id);
            self.user_store.delete_user_auth_token(value)?;
            return Ok(None);
        }
        if let Err(err) = self
            .user_store
            .update_user_auth_token_last_used_timestamp(value)
        {
            warn!("Failed to update auth token last used timestamp: {}", err);
        }
        Ok(Some(token))
    }

    /// Returns false if the token was already gone.
    pub fn delete_auth_token(&self, value: &AuthTokenValue) -> UserResult<bool> {
        Ok(self.user_store.delete_user_auth_token(value)?.is_some())
    }

    pub fn purge_expired_auth_tokens(&self) -> UserResult<usize> {
        let cutoff = SystemTime::now()
            .checked_sub(self.auth_token_ttl)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        Ok(self.user_store.delete_auth_tokens_created_before(cutoff)?)
    }

    pub fn get_user(&self, user_id: &str) -> UserResult<User> {
        self.user_store
            .get_user(user_id)?
            .ok_or(UserError::UserNotFound)
    }

    pub fn get_user_by_email(&self, email: &str) -> UserResult<User> {
        self.user_store
            .get_user_by_email(email)?
            .ok_or(UserError::UserNotFound)
    }

    pub fn get_account(&self, user_id: &str) -> UserResult<UserAccountView> {
        let user = self.get_user(user_id)?;
        let profile_count = self.user_store.count_user_profiles(&user.id)?;
        Ok(UserAccountView {
            id: user.id,
            name: user.name,
            email: user.email,
            profile_count,
        })
    }

    pub fn get_all_users(&self) -> UserResult<Vec<User>> {
        Ok(self.user_store.get_all_users()?)
    }

    pub fn update_password(&self, email: &str, password: &str) -> UserResult<()> {
        if password.is_empty() {
            return Err(UserError::MissingFields);
        }
        let user = self
            .user_store
            .get_user_by_email(email)?
            .ok_or(UserError::UserNotFound)?;
        let credentials = UsernamePasswordCredentials::create(user.id.clone(), password)?;
        self.user_store
            .set_user_password_credentials(&credentials)
            .with_context(|| format!("Failed to update password of {}", email))?;
        Ok(())
    }

    pub fn delete_user(&self, email: &str) -> UserResult<()> {
        let user = self
            .user_store
            .get_user_by_email(email)?
            .ok_or(UserError::UserNotFound)?;
        if !self.user_store.delete_user(&user.id)? {
            return Err(UserError::UserNotFound);
        }
        info!("Deleted user {} <{}>", user.id, user.email);
        Ok(())
    }

    pub fn get_user_profiles(&self, user_id: &UserId) -> UserResult<Vec<UserProfile>> {
        self.get_user(user_id)?;
        Ok(self.user_store.get_user_profiles(user_id)?)
    }

    pub fn create_user_profile(
        &self,
        user_id: &UserId,
        new_profile: NewUserProfile,
    ) -> UserResult<UserProfile> {
        let profile_name = new_profile
            .profile_name
            .filter(|name| !name.is_empty())
            .ok_or(UserError::MissingProfileName)?;
        // The user may have been deleted while the session was alive.
        self.get_user(user_id)?;

        let profile = UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            profile_name,
            skin_tone: new_profile.skin_tone,
            recommendations: new_profile.recommendations,
            avatar: new_profile.avatar.filter(|avatar| !avatar.is_empty()),
            created_at: now_rfc3339(),
        };
        self.user_store.add_user_profile(user_id, &profile)?;
        Ok(profile)
    }

    pub fn delete_user_profile(&self, user_id: &UserId, profile_id: &str) -> UserResult<()> {
        self.get_user(user_id)?;
        if self.user_store.delete_user_profile(user_id, profile_id)? {
            Ok(())
        } else {
            Err(UserError::ProfileNotFound)
        }
    }
}
