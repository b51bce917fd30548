use crate::sqlite_persistence::{Table, VersionedSchema, BASE_DB_VERSION};
use crate::user::*;
use anyhow::{bail, Context, Result};
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};
use serde_json::Value;
use std::{
    path::Path,
    str::FromStr,
    sync::{Arc, Mutex},
    time::{Duration, SystemTime},
};
use tracing::info;

/// V 0
const USER_TABLE_V_0: Table = Table {
    name: "user",
    schema: "CREATE TABLE user (id TEXT NOT NULL, email TEXT NOT NULL UNIQUE, name TEXT NOT NULL, created_at TEXT NOT NULL, PRIMARY KEY (id));",
    columns: &["id", "email", "name", "created_at"],
    indices: &["CREATE INDEX user_email_index ON user (email);"],
};
const USER_PASSWORD_CREDENTIALS_TABLE_V_0: Table = Table {
    name: "user_password_credentials",
    schema: "CREATE TABLE user_password_credentials (user_id TEXT NOT NULL, salt TEXT NOT NULL, hash TEXT NOT NULL, hasher TEXT NOT NULL, created INTEGER DEFAULT (cast(strftime('%s','now') as int)), last_tried INTEGER, last_used INTEGER, PRIMARY KEY (user_id), CONSTRAINT user_id FOREIGN KEY (user_id) REFERENCES user (id) ON DELETE CASCADE);",
    columns: &[
        "user_id",
        "salt",
        "hash",
        "hasher",
        "created",
        "last_tried",
        "last_used",
    ],
    indices: &[],
};
const AUTH_TOKEN_TABLE_V_0: Table = Table {
    name: "auth_token",
    schema: "CREATE TABLE auth_token (user_id TEXT NOT NULL, value TEXT NOT NULL UNIQUE, created INTEGER DEFAULT (cast(strftime('%s','now') as int)), last_used INTEGER, CONSTRAINT user_id FOREIGN KEY (user_id) REFERENCES user (id) ON DELETE CASCADE);",
    columns: &["user_id", "value", "created", "last_used"],
    indices: &["CREATE INDEX auth_token_value_index ON auth_token (value);"],
};

/// V 1
const USER_PROFILE_TABLE_V_1: Table = Table {
    name: "user_profile",
    schema: "CREATE TABLE user_profile (id TEXT NOT NULL, user_id TEXT NOT NULL, profile_name TEXT NOT NULL, skin_tone TEXT NOT NULL, recommendations TEXT NOT NULL, avatar TEXT, created_at TEXT NOT NULL, PRIMARY KEY (id), CONSTRAINT user_id FOREIGN KEY (user_id) REFERENCES user (id) ON DELETE CASCADE);",
    columns: &[
        "id",
        "user_id",
        "profile_name",
        "skin_tone",
        "recommendations",
        "avatar",
        "created_at",
    ],
    indices: &["CREATE INDEX user_profile_user_index ON user_profile (user_id);"],
};

pub const VERSIONED_SCHEMAS: &[VersionedSchema] = &[
    VersionedSchema {
        version: 0,
        tables: &[
            USER_TABLE_V_0,
            USER_PASSWORD_CREDENTIALS_TABLE_V_0,
            AUTH_TOKEN_TABLE_V_0,
        ],
        migration: None,
    },
    VersionedSchema {
        version: 1,
        tables: &[
            USER_TABLE_V_0,
            USER_PASSWORD_CREDENTIALS_TABLE_V_0,
            AUTH_TOKEN_TABLE_V_0,
            USER_PROFILE_TABLE_V_1,
        ],
        migration: Some(|conn: &Connection| USER_PROFILE_TABLE_V_1.create(conn)),
    },
];

#[derive(Clone)]
pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    pub fn new<T: AsRef<Path>>(db_path: T) -> Result<Self> {
        let db_path = db_path.as_ref();
        let conn = if db_path.exists() {
            Connection::open_with_flags(
                db_path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .with_context(|| format!("Failed to open {}", db_path.display()))?
        } else {
            info!("Creating user db at {}", db_path.display());
            let conn = Connection::open(db_path)?;
            Self::create_schema(&conn)?;
            conn
        };
        Self::from_connection(conn)
    }

    /// A throwaway store, nothing is written to disk.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::create_schema(&conn)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Foreign keys are enforced per connection, not per file.
        conn.execute("PRAGMA foreign_keys = ON;", [])?;

        let version = conn
            .query_row("PRAGMA user_version;", [], |row| row.get::<usize, usize>(0))
            .context("Failed to read database version")?
            .checked_sub(BASE_DB_VERSION)
            .context("Not a user database")?;

        if version >= VERSIONED_SCHEMAS.len() {
            bail!("Database version {} is too new", version);
        }
        VERSIONED_SCHEMAS[version].validate(&conn)?;

        Self::migrate_if_needed(&conn, version)?;

        Ok(SqliteUserStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        VERSIONED_SCHEMAS
            .last()
            .context("No schema defined")?
            .create(conn)
    }

    fn migrate_if_needed(conn: &Connection, version: usize) -> Result<()> {
        let mut latest_from = version;
        for schema in VERSIONED_SCHEMAS.iter().skip(version + 1) {
            if let Some(migration_fn) = schema.migration {
                info!(
                    "Migrating db from version {} to {}",
                    latest_from, schema.version
                );
                migration_fn(conn)?;
                latest_from = schema.version;
            }
        }
        conn.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + latest_from),
            [],
        )?;

        Ok(())
    }
}

fn system_time_from_column_result(value: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(value.max(0) as u64)
}

fn system_time_to_column(value: SystemTime) -> i64 {
    value
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn json_column(row: &Row, idx: usize) -> rusqlite::Result<Value> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn auth_token_from_row(row: &Row) -> rusqlite::Result<AuthToken> {
    Ok(AuthToken {
        user_id: row.get(0)?,
        value: AuthTokenValue(row.get(1)?),
        created: system_time_from_column_result(row.get(2)?),
        last_used: row
            .get::<usize, Option<i64>>(3)?
            .map(system_time_from_column_result),
    })
}

fn profile_from_row(row: &Row) -> rusqlite::Result<UserProfile> {
    Ok(UserProfile {
        id: row.get(0)?,
        profile_name: row.get(1)?,
        skin_tone: json_column(row, 2)?,
        recommendations: json_column(row, 3)?,
        avatar: row.get(4)?,
        created_at: row.get(5)?,
    })
}

impl UserStore for SqliteUserStore {
    fn create_user(&self, user: &User) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO user (id, email, name, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![user.id, user.email, user.name, user.created_at],
        )
        .with_context(|| format!("Failed to create user {}", user.email))?;
        Ok(())
    }

    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        Ok(conn
            .query_row(
                "SELECT id, email, name, created_at FROM user WHERE id = ?1",
                params![user_id],
                user_from_row,
            )
            .optional()?)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        Ok(conn
            .query_row(
                "SELECT id, email, name, created_at FROM user WHERE email = ?1",
                params![email],
                user_from_row,
            )
            .optional()?)
    }

    fn get_all_users(&self) -> Result<Vec<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, email, name, created_at FROM user ORDER BY rowid")?;
        let users = stmt
            .query_map([], user_from_row)?
            .collect::<Result<Vec<User>, _>>()?;
        Ok(users)
    }

    fn delete_user(&self, user_id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM user WHERE id = ?1", params![user_id])?;
        Ok(deleted > 0)
    }
}

impl UserAuthTokenStore for SqliteUserStore {
    fn get_user_auth_token(&self, value: &AuthTokenValue) -> Result<Option<AuthToken>> {
        let conn = self.conn.lock().unwrap();
        Ok(conn
            .query_row(
                "SELECT user_id, value, created, last_used FROM auth_token WHERE value = ?1",
                params![value.0],
                auth_token_from_row,
            )
            .optional()?)
    }

    fn delete_user_auth_token(&self, value: &AuthTokenValue) -> Result<Option<AuthToken>> {
        let token = match self.get_user_auth_token(value)? {
            Some(token) => token,
            None => return Ok(None),
        };
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM auth_token WHERE value = ?1",
            params![token.value.0],
        )?;
        Ok(Some(token))
    }

    fn update_user_auth_token_last_used_timestamp(&self, value: &AuthTokenValue) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE auth_token SET last_used = ?1 WHERE value = ?2",
            params![system_time_to_column(SystemTime::now()), value.0],
        )?;
        Ok(())
    }

    fn add_user_auth_token(&self, token: &AuthToken) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO auth_token (user_id, value, created, last_used) VALUES (?1, ?2, ?3, ?4)",
            params![
                token.user_id,
                token.value.0,
                system_time_to_column(token.created),
                token.last_used.map(system_time_to_column),
            ],
        )?;
        Ok(())
    }

    fn delete_auth_tokens_created_before(&self, created_before: SystemTime) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute(
            "DELETE FROM auth_token WHERE created < ?1",
            params![system_time_to_column(created_before)],
        )?;
        Ok(deleted)
    }
}

impl UserAuthCredentialsStore for SqliteUserStore {
    fn get_user_password_credentials(
        &self,
        user_id: &str,
    ) -> Result<Option<UsernamePasswordCredentials>> {
        let conn = self.conn.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT user_id, salt, hash, hasher, created, last_tried, last_used FROM user_password_credentials WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<usize, String>(0)?,
                        row.get::<usize, String>(1)?,
                        row.get::<usize, String>(2)?,
                        row.get::<usize, String>(3)?,
                        row.get::<usize, i64>(4)?,
                        row.get::<usize, Option<i64>>(5)?,
                        row.get::<usize, Option<i64>>(6)?,
                    ))
                },
            )
            .optional()?;

        let Some((user_id, salt, hash, hasher, created, last_tried, last_used)) = row else {
            return Ok(None);
        };
        Ok(Some(UsernamePasswordCredentials {
            user_id,
            salt,
            hash,
            hasher: BeaukitHasher::from_str(&hasher)?,
            created: system_time_from_column_result(created),
            last_tried: last_tried.map(system_time_from_column_result),
            last_used: last_used.map(system_time_from_column_result),
        }))
    }

    fn set_user_password_credentials(
        &self,
        credentials: &UsernamePasswordCredentials,
    ) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO user_password_credentials (user_id, salt, hash, hasher, created) VALUES (?1, ?2, ?3, ?4, ?5) \
             ON CONFLICT(user_id) DO UPDATE SET salt = excluded.salt, hash = excluded.hash, hasher = excluded.hasher, created = excluded.created",
            params![
                credentials.user_id,
                credentials.salt,
                credentials.hash,
                credentials.hasher.to_string(),
                system_time_to_column(credentials.created),
            ],
        )
        .with_context(|| format!("Failed to set password of user {}", credentials.user_id))?;
        Ok(())
    }

    fn record_password_attempt(&self, user_id: &str, succeeded: bool) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let now = system_time_to_column(SystemTime::now());
        if succeeded {
            conn.execute(
                "UPDATE user_password_credentials SET last_tried = ?1, last_used = ?1 WHERE user_id = ?2",
                params![now, user_id],
            )?;
        } else {
            conn.execute(
                "UPDATE user_password_credentials SET last_tried = ?1 WHERE user_id = ?2",
                params![now, user_id],
            )?;
        }
        Ok(())
    }
}

impl UserProfileStore for SqliteUserStore {
    fn get_user_profiles(&self, user_id: &str) -> Result<Vec<UserProfile>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, profile_name, skin_tone, recommendations, avatar, created_at FROM user_profile WHERE user_id = ?1 ORDER BY rowid",
        )?;
        let profiles = stmt
            .query_map(params![user_id], profile_from_row)?
            .collect::<Result<Vec<UserProfile>, _>>()?;
        Ok(profiles)
    }

    fn count_user_profiles(&self, user_id: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: usize = conn.query_row(
            "SELECT COUNT(*) FROM user_profile WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn add_user_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO user_profile (id, user_id, profile_name, skin_tone, recommendations, avatar, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile.id,
                user_id,
                profile.profile_name,
                serde_json::to_string(&profile.skin_tone)?,
                serde_json::to_string(&profile.recommendations)?,
                profile.avatar,
                profile.created_at,
            ],
        )
        .with_context(|| format!("Failed to add profile for user {}", user_id))?;
        Ok(())
    }

    fn delete_user_profile(&self, user_id: &str, profile_id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute(
            "DELETE FROM user_profile WHERE id = ?1 AND user_id = ?2",
            params![profile_id, user_id],
        )?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_tmp_store() -> (SqliteUserStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let temp_file_path = temp_dir.path().join("test.db");
        let store = SqliteUserStore::new(&temp_file_path).unwrap();
        (store, temp_dir)
    }

    fn test_user(id: &str, email: &str) -> User {
        User {
            id: id.to_owned(),
            name: "Test User".to_owned(),
            email: email.to_owned(),
            created_at: "2024-01-01T00:00:00Z".to_owned(),
        }
    }

    fn test_profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_owned(),
            profile_name: format!("profile {}", id),
            skin_tone: json!({"name": "Golden Beige", "undertone": "warm"}),
            recommendations: json!({"jewelry": {"metals": []}}),
            avatar: None,
            created_at: "2024-01-02T00:00:00Z".to_owned(),
        }
    }

    #[test]
    fn test_create_user() {
        let (store, _temp_dir) = create_tmp_store();

        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        assert_eq!(store.get_user("u1").unwrap().unwrap().email, "a@b.c");
        assert_eq!(store.get_user_by_email("a@b.c").unwrap().unwrap().id, "u1");
        assert!(store.get_user_by_email("x@b.c").unwrap().is_none());

        let duplicate = store.create_user(&test_user("u2", "a@b.c"));
        assert!(duplicate.is_err());
    }

    #[test]
    fn reopens_existing_db() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");
        {
            let store = SqliteUserStore::new(&path).unwrap();
            store.create_user(&test_user("u1", "a@b.c")).unwrap();
        }
        let store = SqliteUserStore::new(&path).unwrap();
        assert_eq!(store.get_all_users().unwrap().len(), 1);
    }

    #[test]
    fn migrates_from_version_0() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");
        {
            let conn = Connection::open(&path).unwrap();
            VERSIONED_SCHEMAS[0].create(&conn).unwrap();
        }

        let store = SqliteUserStore::new(&path).unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        store.add_user_profile("u1", &test_profile("p1")).unwrap();
        assert_eq!(store.count_user_profiles("u1").unwrap(), 1);

        let conn = store.conn.lock().unwrap();
        let version: usize = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, BASE_DB_VERSION + 1);
    }

    #[test]
    fn rejects_too_new_db() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(&format!("PRAGMA user_version = {}", BASE_DB_VERSION + 99), [])
                .unwrap();
        }
        assert!(SqliteUserStore::new(&path).is_err());
    }

    #[test]
    fn stores_password_credentials() {
        let store = SqliteUserStore::in_memory().unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        assert!(store.get_user_password_credentials("u1").unwrap().is_none());

        let credentials = UsernamePasswordCredentials::create("u1".to_owned(), "first").unwrap();
        store.set_user_password_credentials(&credentials).unwrap();
        let credentials = UsernamePasswordCredentials::create("u1".to_owned(), "second").unwrap();
        store.set_user_password_credentials(&credentials).unwrap();

        let loaded = store.get_user_password_credentials("u1").unwrap().unwrap();
        assert!(loaded.verify("second").unwrap());
        assert!(!loaded.verify("first").unwrap());
        assert!(loaded.last_used.is_none());

        store.record_password_attempt("u1", true).unwrap();
        let loaded = store.get_user_password_credentials("u1").unwrap().unwrap();
        assert!(loaded.last_used.is_some());
        assert!(loaded.last_tried.is_some());
    }

    #[test]
    fn cannot_add_credentials_without_user() {
        let store = SqliteUserStore::in_memory().unwrap();
        let credentials = UsernamePasswordCredentials::create("ghost".to_owned(), "pw").unwrap();
        assert!(store.set_user_password_credentials(&credentials).is_err());
    }

    #[test]
    fn manages_auth_tokens() {
        let store = SqliteUserStore::in_memory().unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();

        let old = AuthToken {
            user_id: "u1".to_owned(),
            created: SystemTime::UNIX_EPOCH + Duration::from_secs(10),
            last_used: None,
            value: AuthTokenValue::generate(),
        };
        let fresh = AuthToken {
            created: SystemTime::now(),
            value: AuthTokenValue::generate(),
            ..old.clone()
        };
        store.add_user_auth_token(&old).unwrap();
        store.add_user_auth_token(&fresh).unwrap();
        assert!(store.get_user_auth_token(&old.value).unwrap().is_some());

        store
            .update_user_auth_token_last_used_timestamp(&fresh.value)
            .unwrap();
        let loaded = store.get_user_auth_token(&fresh.value).unwrap().unwrap();
        assert_eq!(loaded.user_id, "u1");
        assert!(loaded.last_used.is_some());

        let deleted = store
            .delete_auth_tokens_created_before(SystemTime::UNIX_EPOCH + Duration::from_secs(1000))
            .unwrap();
        assert_eq!(deleted, 1);
        assert!(store.get_user_auth_token(&old.value).unwrap().is_none());

        assert!(store.delete_user_auth_token(&fresh.value).unwrap().is_some());
        assert!(store.delete_user_auth_token(&fresh.value).unwrap().is_none());
    }

    #[test]
    fn lists_profiles_in_creation_order() {
        let store = SqliteUserStore::in_memory().unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        store.create_user(&test_user("u2", "d@e.f")).unwrap();

        for id in ["p3", "p1", "p2"] {
            store.add_user_profile("u1", &test_profile(id)).unwrap();
        }
        store.add_user_profile("u2", &test_profile("p4")).unwrap();

        let ids: Vec<String> = store
            .get_user_profiles("u1")
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["p3", "p1", "p2"]);
        assert_eq!(store.get_user_profiles("u1").unwrap()[0], test_profile("p3"));
        assert_eq!(store.count_user_profiles("u2").unwrap(), 1);
    }

    #[test]
    fn deletes_only_own_profiles() {
        let store = SqliteUserStore::in_memory().unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        store.create_user(&test_user("u2", "d@e.f")).unwrap();
        store.add_user_profile("u1", &test_profile("p1")).unwrap();

        assert!(!store.delete_user_profile("u2", "p1").unwrap());
        assert!(store.delete_user_profile("u1", "p1").unwrap());
        assert!(!store.delete_user_profile("u1", "p1").unwrap());
    }

    #[test]
    fn deleting_user_cascades() {
        let store = SqliteUserStore::in_memory().unwrap();
        store.create_user(&test_user("u1", "a@b.c")).unwrap();
        let credentials = UsernamePasswordCredentials::create("u1".to_owned(), "pw").unwrap();
        store.set_user_password_credentials(&credentials).unwrap();
        store.add_user_profile("u1", &test_profile("p1")).unwrap();
        let token = AuthToken {
            user_id: "u1".to_owned(),
            created: SystemTime::now(),
            last_used: None,
            value: AuthTokenValue::generate(),
        };
        store.add_user_auth_token(&token).unwrap();

        assert!(store.delete_user("u1").unwrap());
        assert!(!store.delete_user("u1").unwrap());
        assert!(store.get_user_password_credentials("u1").unwrap().is_none());
        assert!(store.get_user_auth_token(&token.value).unwrap().is_none());
        assert_eq!(store.count_user_profiles("u1").unwrap(), 0);
    }
}
