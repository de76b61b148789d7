use campuskart::config::cors::CorsConfig;
use campuskart::config::jwt::JwtConfig;
use campuskart::router::init_router;
use campuskart::state::AppState;
use campuskart::utils::jwt::{create_admin_token, create_user_token};
use campuskart::utils::password::hash_password;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    active: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, password, user_type, is_active)
        VALUES ('Test User', $1, $2, 'hosteller', $3)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(hashed)
    .bind(active)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Role and permission flags for a test admin. Defaults to a plain admin
/// with no permissions granted.
#[derive(Clone, Copy)]
pub struct AdminFlags {
    pub role: &'static str,
    pub manage_users: bool,
    pub manage_requests: bool,
    pub handle_complaints: bool,
    pub view_analytics: bool,
    pub system_settings: bool,
}

impl Default for AdminFlags {
    fn default() -> Self {
        Self {
            role: "admin",
            manage_users: false,
            manage_requests: false,
            handle_complaints: false,
            view_analytics: false,
            system_settings: false,
        }
    }
}

#[allow(dead_code)]
pub fn super_admin_flags() -> AdminFlags {
    AdminFlags {
        role: "super-admin",
        manage_users: true,
        manage_requests: true,
        handle_complaints: true,
        view_analytics: true,
        system_settings: true,
    }
}

#[allow(dead_code)]
pub struct TestAdmin {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub role: String,
}

pub async fn create_test_admin(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    password: &str,
    flags: AdminFlags,
) -> TestAdmin {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO admins (
            username, email, password, role,
            manage_users, manage_requests, handle_complaints, view_analytics, system_settings
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(format!("{}@test.com", username))
    .bind(hashed)
    .bind(flags.role)
    .bind(flags.manage_users)
    .bind(flags.manage_requests)
    .bind(flags.handle_complaints)
    .bind(flags.view_analytics)
    .bind(flags.system_settings)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestAdmin {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role: flags.role.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_request(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    title: &str,
    status: &str,
) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO requests (user_id, title, description, status, price)
        VALUES ($1, $2, 'Test description', $3, 50.0)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(status)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_complaint(
    tx: &mut Transaction<'_, Postgres>,
    reported_by: Uuid,
    reported_user: Option<Uuid>,
) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO complaints (reported_by, reported_user, complaint_type, title, description)
        VALUES ($1, $2, 'spam', 'Test complaint', 'Test complaint description')
        RETURNING id
        "#,
    )
    .bind(reported_by)
    .bind(reported_user)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    format!("admin-{}", Uuid::new_v4())
}

/// Bearer token for an end-user, signed the same way the server signs them.
#[allow(dead_code)]
pub fn user_bearer(user: &TestUser) -> String {
    dotenvy::dotenv().ok();
    let token = create_user_token(user.id, &user.email, &JwtConfig::from_env()).unwrap();
    format!("Bearer {}", token)
}

#[allow(dead_code)]
pub fn admin_bearer(admin: &TestAdmin) -> String {
    dotenvy::dotenv().ok();
    let token =
        create_admin_token(admin.id, &admin.username, &admin.role, &JwtConfig::from_env())
            .unwrap();
    format!("Bearer {}", token)
}
