mod config;
mod error;
mod http_layers;
mod server;
mod session;
mod state;

pub use config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
pub use error::ApiError;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub use session::{Session, COOKIE_SESSION_TOKEN_KEY, HEADER_SESSION_TOKEN_KEY};
