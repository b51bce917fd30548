use crate::analysis::AnalysisError;
use crate::user::UserError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error("No token provided")]
    NoToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("{}", .0.body_text())]
    Rejected(#[from] JsonRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Analysis(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(rejection) => rejection.status(),
            ApiError::NoToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::User(err) => match err {
                UserError::MissingFields | UserError::MissingProfileName => {
                    StatusCode::BAD_REQUEST
                }
                UserError::EmailAlreadyRegistered => StatusCode::CONFLICT,
                UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                UserError::UserNotFound | UserError::ProfileNotFound => StatusCode::NOT_FOUND,
                UserError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::User(UserError::Store(err)) => {
                error!("Store failure: {:#}", err);
                "Internal server error".to_owned()
            }
            _ => self.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
