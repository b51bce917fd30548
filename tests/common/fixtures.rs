//! Test database fixtures

use super::constants::*;
use anyhow::Result;
use beaukit_server::user::{SqliteUserStore, UserManager, DEFAULT_AUTH_TOKEN_TTL};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a user db holding the seeded test user.
pub fn create_test_db_with_users() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("users.db");

    let user_store = SqliteUserStore::new(&db_path)?;
    let user_manager = UserManager::new(Box::new(user_store), DEFAULT_AUTH_TOKEN_TTL);
    user_manager.add_user(TEST_NAME, TEST_EMAIL, TEST_PASS)?;

    Ok((temp_dir, db_path))
}
