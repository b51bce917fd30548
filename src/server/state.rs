use axum::extract::FromRef;

use crate::analysis::RecommendationResolver;
use crate::user::UserManager;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedUserManager = Arc<UserManager>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub user_manager: GuardedUserManager,
    pub resolver: RecommendationResolver,
}

impl ServerState {
    pub fn new(config: ServerConfig, user_manager: UserManager) -> ServerState {
        let resolver = RecommendationResolver::with_range_policy(config.range_policy);
        ServerState {
            config,
            start_time: Instant::now(),
            user_manager: Arc::new(user_manager),
            resolver,
        }
    }
}

impl FromRef<ServerState> for GuardedUserManager {
    fn from_ref(input: &ServerState) -> Self {
        input.user_manager.clone()
    }
}

impl FromRef<ServerState> for RecommendationResolver {
    fn from_ref(input: &ServerState) -> Self {
        input.resolver
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
