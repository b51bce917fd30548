use anyhow::{Context, Result};
use std::time::Duration;

use tracing::info;

use axum_extra::extract::cookie::{Cookie, SameSite};

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::{header, HeaderMap},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use super::error::ApiError;
use super::session::{Session, COOKIE_SESSION_TOKEN_KEY};
use super::{log_requests, state::*, ServerConfig};
use crate::analysis::{PixelsRequest, RecommendationResolver, SkinToneAnalysis};
use crate::user::{
    AuthToken, AuthTokenValue, NewUserProfile, User, UserAccountView, UserManager, UserProfile,
    UserView,
};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct SignUpBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SignInBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize)]
struct AuthSuccessResponse {
    token: String,
    user: UserView,
}

fn session_cookie(token: &AuthToken, ttl: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_SESSION_TOKEN_KEY, token.value.0.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX))
        .build()
}

fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_SESSION_TOKEN_KEY, ""))
        .path("/")
        .expires(time::OffsetDateTime::now_utc() - time::Duration::days(1))
        .same_site(SameSite::Lax)
        .build()
}

/// Token in the body for header based clients, cookie for browsers.
fn auth_success_response(user: &User, token: &AuthToken, ttl: Duration) -> Response {
    let body = AuthSuccessResponse {
        token: token.value.0.clone(),
        user: UserView::from(user),
    };
    (
        [(header::SET_COOKIE, session_cookie(token, ttl).to_string())],
        Json(body),
    )
        .into_response()
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: "BeauKit API v2 Running",
        uptime: format_uptime(state.start_time.elapsed()),
    })
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

async fn analyze_pixels(
    State(resolver): State<RecommendationResolver>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SkinToneAnalysis>, ApiError> {
    // No JSON at all, an empty body and `null` all mean no components.
    let request = if has_json_content_type(&headers)
        && !body.iter().all(u8::is_ascii_whitespace)
    {
        let Json(request) = Json::<Option<PixelsRequest>>::from_bytes(&body)?;
        request.unwrap_or_default()
    } else {
        PixelsRequest::default()
    };
    Ok(Json(resolver.resolve_request(&request)?))
}

async fn signup(
    State(user_manager): State<GuardedUserManager>,
    payload: Result<Json<SignUpBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let (user, token) = user_manager.sign_up(
        body.name.as_deref().unwrap_or_default(),
        body.email.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
    )?;
    Ok(auth_success_response(
        &user,
        &token,
        user_manager.auth_token_ttl(),
    ))
}

async fn signin(
    State(user_manager): State<GuardedUserManager>,
    payload: Result<Json<SignInBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let (user, token) = user_manager.sign_in(
        body.email.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
    )?;
    Ok(auth_success_response(
        &user,
        &token,
        user_manager.auth_token_ttl(),
    ))
}

async fn me(
    session: Session,
    State(user_manager): State<GuardedUserManager>,
) -> Result<Json<UserAccountView>, ApiError> {
    Ok(Json(user_manager.get_account(&session.user_id)?))
}

async fn signout(
    session: Session,
    State(user_manager): State<GuardedUserManager>,
) -> Result<Response, ApiError> {
    user_manager.delete_auth_token(&AuthTokenValue(session.token))?;
    Ok((
        [(header::SET_COOKIE, expired_session_cookie().to_string())],
        Json(json!({ "success": true })),
    )
        .into_response())
}

async fn get_profiles(
    session: Session,
    State(user_manager): State<GuardedUserManager>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    Ok(Json(user_manager.get_user_profiles(&session.user_id)?))
}

async fn post_profile(
    session: Session,
    State(user_manager): State<GuardedUserManager>,
    payload: Result<Json<NewUserProfile>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Json(new_profile) = payload?;
    Ok(Json(
        user_manager.create_user_profile(&session.user_id, new_profile)?,
    ))
}

async fn delete_profile(
    session: Session,
    State(user_manager): State<GuardedUserManager>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    user_manager.delete_user_profile(&session.user_id, &id)?;
    Ok(Json(json!({ "success": true })))
}

pub fn make_app(config: ServerConfig, user_manager: UserManager) -> Router {
    let state = ServerState::new(config.clone(), user_manager);

    let auth_routes: Router<ServerState> = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/me", get(me))
        .route("/signout", get(signout));

    let api_routes: Router = Router::new()
        .route("/health", get(health))
        .route("/analyze-pixels", post(analyze_pixels))
        .route("/profiles", get(get_profiles).post(post_profile))
        .route("/profiles/{id}", delete(delete_profile))
        .nest("/auth", auth_routes)
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, user_manager: UserManager) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, user_manager);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", address);

    Ok(axum::serve(listener, app).await?)
}
