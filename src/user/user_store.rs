use super::auth::{AuthToken, AuthTokenValue, UsernamePasswordCredentials};
use super::user_models::{User, UserProfile};
use anyhow::Result;
use std::time::SystemTime;

pub trait UserAuthCredentialsStore: Send + Sync {
    /// Returns the user's password credentials.
    /// Returns None if the user does not exist or has no password.
    fn get_user_password_credentials(
        &self,
        user_id: &str,
    ) -> Result<Option<UsernamePasswordCredentials>>;

    /// Creates or replaces the user's password credentials.
    fn set_user_password_credentials(&self, credentials: &UsernamePasswordCredentials)
        -> Result<()>;

    /// Stamps the last login attempt, and the last successful login if `succeeded`.
    fn record_password_attempt(&self, user_id: &str, succeeded: bool) -> Result<()>;
}

pub trait UserAuthTokenStore: Send + Sync {
    /// Returns a user's authentication token given an AuthTokenValue.
    /// Returns None if the token does not exist.
    fn get_user_auth_token(&self, token: &AuthTokenValue) -> Result<Option<AuthToken>>;

    /// Deletes an auth token given the token value.
    /// Returns None if the token does not exist.
    fn delete_user_auth_token(&self, token: &AuthTokenValue) -> Result<Option<AuthToken>>;

    /// Updates an auth token with the latest timestamp.
    fn update_user_auth_token_last_used_timestamp(&self, token: &AuthTokenValue) -> Result<()>;

    /// Adds a new auth token.
    fn add_user_auth_token(&self, token: &AuthToken) -> Result<()>;

    /// Deletes every token created before `created_before`, returns how many went.
    fn delete_auth_tokens_created_before(&self, created_before: SystemTime) -> Result<usize>;
}

pub trait UserProfileStore: Send + Sync {
    /// Returns the user's profiles, oldest first.
    fn get_user_profiles(&self, user_id: &str) -> Result<Vec<UserProfile>>;

    fn count_user_profiles(&self, user_id: &str) -> Result<usize>;

    fn add_user_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()>;

    /// Returns false if the user has no profile with that id.
    fn delete_user_profile(&self, user_id: &str, profile_id: &str) -> Result<bool>;
}

pub trait UserStore:
    UserAuthTokenStore + UserAuthCredentialsStore + UserProfileStore + Send + Sync
{
    /// Fails if the email is already registered.
    fn create_user(&self, user: &User) -> Result<()>;

    /// Returns None if the user does not exist.
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Returns None if no user has registered with this email.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Returns all users, oldest first.
    fn get_all_users(&self) -> Result<Vec<User>>;

    /// Deletes the user along with credentials, tokens and profiles.
    /// Returns false if the user does not exist.
    fn delete_user(&self, user_id: &str) -> Result<bool>;
}
