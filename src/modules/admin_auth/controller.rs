use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use tracing::instrument;

use crate::middleware::admin_auth::{ADMIN_SESSION_COOKIE, AdminSession};
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AdminInfo, AdminLoginDto, AdminLoginResponse, SetupDto};
use super::service::AdminAuthService;

fn admin_session_cookie(token: &str, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((ADMIN_SESSION_COOKIE, token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Admin login
#[utoipa::path(
    post,
    path = "/admin/auth/login",
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid credentials or disabled account")
    ),
    tag = "Admin Authentication"
)]
#[instrument(skip_all)]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<AdminLoginDto>,
) -> Result<(CookieJar, Json<AdminLoginResponse>), AppError> {
    let (admin, token) = AdminAuthService::login(&state.db, dto, &state.jwt_config).await?;
    let jar = jar.add(admin_session_cookie(
        &token,
        state.jwt_config.admin_token_expiry,
    ));
    Ok((
        jar,
        Json(AdminLoginResponse {
            message: "Login successful".to_string(),
            admin: AdminInfo::from(&admin),
        }),
    ))
}

/// Admin logout
#[utoipa::path(
    post,
    path = "/admin/auth/logout",
    responses((status = 200, description = "Session cookie cleared", body = MessageResponse)),
    security(("bearer_auth" = [])),
    tag = "Admin Authentication"
)]
#[instrument(skip_all)]
pub async fn admin_logout(
    _session: AdminSession,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((ADMIN_SESSION_COOKIE, "")).path("/").build());
    (
        jar,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

/// Verify the admin session and return the resolved account
#[utoipa::path(
    get,
    path = "/admin/auth/verify",
    responses(
        (status = 200, description = "Session is valid", body = AdminInfo),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 403, description = "Admin account disabled")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Authentication"
)]
#[instrument(skip_all)]
pub async fn admin_verify(AdminSession(admin): AdminSession) -> Json<AdminInfo> {
    Json(AdminInfo::from(&admin))
}

/// One-time bootstrap of the first super-admin
#[utoipa::path(
    post,
    path = "/admin/setup",
    request_body = SetupDto,
    responses(
        (status = 201, description = "Super admin created", body = AdminInfo),
        (status = 400, description = "An admin already exists")
    ),
    tag = "Admin Authentication"
)]
#[instrument(skip_all)]
pub async fn admin_setup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SetupDto>,
) -> Result<(StatusCode, Json<AdminInfo>), AppError> {
    let admin = AdminAuthService::setup(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(AdminInfo::from(&admin))))
}
