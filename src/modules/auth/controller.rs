use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{Value, json};
use time::Duration;
use tracing::instrument;

use crate::middleware::auth::{AuthSession, USER_SESSION_COOKIE};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginDto, MessageResponse, ProfileResponse, RegisterDto};
use super::service::AuthService;
use crate::modules::requests::service::RequestService;

fn session_cookie(token: &str, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((USER_SESSION_COOKIE, token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created, token issued", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(CookieJar, (StatusCode, Json<AuthResponse>)), AppError> {
    let response = AuthService::register(&state.db, dto, &state.jwt_config).await?;
    let jar = jar.add(session_cookie(
        &response.token,
        state.jwt_config.user_token_expiry,
    ));
    Ok((jar, (StatusCode::CREATED, Json(response))))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account blocked")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    let jar = jar.add(session_cookie(
        &response.token,
        state.jwt_config.user_token_expiry,
    ));
    Ok((jar, Json(response)))
}

/// Clear the session cookie
#[utoipa::path(
    get,
    path = "/api/logout",
    responses((status = 200, description = "Session cookie cleared", body = MessageResponse)),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((USER_SESSION_COOKIE, "")).path("/").build());
    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Fetch the caller's profile with owned requests populated
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Own profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Account blocked")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn profile(
    State(state): State<AppState>,
    AuthSession(user): AuthSession,
) -> Result<Json<ProfileResponse>, AppError> {
    let requests = RequestService::list_owned(&state.db, user.id).await?;
    Ok(Json(ProfileResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        user_type: user.user_type,
        requests,
    }))
}

/// Lightweight session check
#[utoipa::path(
    get,
    path = "/api/userexist",
    responses(
        (status = 200, description = "Session is valid"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn user_exists(_session: AuthSession) -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Server is running")),
    tag = "Health"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}
