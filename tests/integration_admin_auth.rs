mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{admin_bearer, create_test_admin, generate_unique_username, setup_test_app, AdminFlags, super_admin_flags};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_setup_creates_first_super_admin(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/setup")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "founder",
                "email": "founder@test.com",
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], "founder");
    assert_eq!(body["role"], "super-admin");
    assert_eq!(body["permissions"]["manageUsers"], true);
    assert_eq!(body["permissions"]["systemSettings"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_setup_refused_once_an_admin_exists(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_test_admin(&mut tx, &generate_unique_username(), "secret123", AdminFlags::default())
        .await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/setup")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "latecomer",
                "email": "latecomer@test.com",
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_with_username(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    create_test_admin(&mut tx, &username, "secret123", super_admin_flags()).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("adminToken="));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["admin"]["username"], username);
    assert_eq!(body["admin"]["role"], "super-admin");

    // login stamps last_login
    let last_login: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_login FROM admins WHERE username = $1")
            .bind(&username)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(last_login.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_with_email(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    create_test_admin(&mut tx, &username, "secret123", AdminFlags::default()).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": format!("{}@test.com", username),
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_wrong_password(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    create_test_admin(&mut tx, &username, "secret123", AdminFlags::default()).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": "wrongpassword"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_disabled_admin_cannot_login(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    let admin = create_test_admin(&mut tx, &username, "secret123", AdminFlags::default()).await;
    sqlx::query("UPDATE admins SET is_active = FALSE WHERE id = $1")
        .bind(admin.id)
        .execute(&mut *tx)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": "secret123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_verify_returns_admin_info(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    let admin = create_test_admin(&mut tx, &username, "secret123", super_admin_flags()).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/auth/verify")
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["username"], username);
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deactivation_takes_effect_immediately(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    let admin = create_test_admin(&mut tx, &username, "secret123", super_admin_flags()).await;
    tx.commit().await.unwrap();

    // token issued while the account was active
    let bearer = admin_bearer(&admin);

    sqlx::query("UPDATE admins SET is_active = FALSE WHERE id = $1")
        .bind(admin.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/auth/verify")
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_token_rejected_on_admin_surface(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user =
        common::create_test_user(&mut tx, &common::generate_unique_email(), "secret123", true)
            .await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/auth/verify")
        .header(header::AUTHORIZATION, common::user_bearer(&user))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
