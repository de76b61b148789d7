use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::admin_auth::router::init_admin_auth_router;
use crate::modules::admin_complaints::router::init_admin_complaints_router;
use crate::modules::admin_requests::router::init_admin_requests_router;
use crate::modules::admin_users::router::init_admin_users_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::complaints::router::init_complaints_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::requests::router::init_requests_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .merge(init_requests_router())
                .merge(init_complaints_router()),
        )
        .nest(
            "/admin",
            Router::new()
                .merge(init_admin_auth_router())
                .merge(init_dashboard_router())
                .merge(init_admin_users_router())
                .merge(init_admin_requests_router())
                .merge(init_admin_complaints_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
