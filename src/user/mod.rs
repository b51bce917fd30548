pub mod auth;
mod sqlite_user_store;
mod user_manager;
pub mod user_models;
mod user_store;

pub use auth::{AuthToken, AuthTokenValue, BeaukitHasher, UsernamePasswordCredentials};
pub use sqlite_user_store::SqliteUserStore;
pub use user_manager::{UserError, UserManager, UserResult, DEFAULT_AUTH_TOKEN_TTL};
pub use user_models::{NewUserProfile, User, UserAccountView, UserId, UserProfile, UserView};
pub use user_store::{UserAuthCredentialsStore, UserAuthTokenStore, UserProfileStore, UserStore};
