//! BeauKit server library
//!
//! Skin tone analysis, accounts and saved profiles, exposed for the binaries
//! and the end to end tests.

pub mod analysis;
pub mod config;
pub mod server;
pub mod sqlite_persistence;
pub mod user;

pub use analysis::{RangePolicy, RecommendationResolver, SkinToneAnalysis};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use user::{SqliteUserStore, UserManager, UserStore};
