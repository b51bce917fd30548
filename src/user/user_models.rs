use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type UserId = String;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// RFC 3339.
    pub created_at: String,
}

/// What the account endpoints return about a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// A saved analysis. `skin_tone` and `recommendations` are kept verbatim as
/// the client sent them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub profile_name: String,
    pub skin_tone: Value,
    pub recommendations: Value,
    pub avatar: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub skin_tone: Value,
    #[serde(default)]
    pub recommendations: Value,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// The signed in user, as returned by the `me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub profile_count: usize,
}
