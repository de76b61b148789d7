mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    AdminFlags, admin_bearer, create_test_admin, create_test_request, create_test_user,
    generate_unique_email, generate_unique_username, setup_test_app,
};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_requests_requires_permission(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags::default(),
    )
    .await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/requests")
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_requests_status_filter(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags {
            manage_requests: true,
            ..AdminFlags::default()
        },
    )
    .await;
    let user = create_test_user(&mut tx, &generate_unique_email(), "secret123", true).await;
    create_test_request(&mut tx, user.id, "Active one", "active").await;
    create_test_request(&mut tx, user.id, "Done one", "completed").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/requests?status=completed")
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Done one");
    assert_eq!(data[0]["user"]["email"], user.email);
    assert_eq!(body["meta"]["total"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_requests_search(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags {
            manage_requests: true,
            ..AdminFlags::default()
        },
    )
    .await;
    let user = create_test_user(&mut tx, &generate_unique_email(), "secret123", true).await;
    create_test_request(&mut tx, user.id, "Fetch groceries", "active").await;
    create_test_request(&mut tx, user.id, "Collect parcel", "active").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/admin/requests?search=groceries")
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Fetch groceries");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_complete_request(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags {
            manage_requests: true,
            ..AdminFlags::default()
        },
    )
    .await;
    let user = create_test_user(&mut tx, &generate_unique_email(), "secret123", true).await;
    let request_id = create_test_request(&mut tx, user.id, "Close me", "accepted").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/admin/requests/{}/complete", request_id))
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "completed");

    let status: String = sqlx::query_scalar("SELECT status FROM requests WHERE id = $1")
        .bind(request_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "completed");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_request(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags {
            manage_requests: true,
            ..AdminFlags::default()
        },
    )
    .await;
    let user = create_test_user(&mut tx, &generate_unique_email(), "secret123", true).await;
    let request_id = create_test_request(&mut tx, user.id, "Remove me", "active").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/admin/requests/{}", request_id))
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE id = $1")
        .bind(request_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_complete_missing_request(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_admin(
        &mut tx,
        &generate_unique_username(),
        "secret123",
        AdminFlags {
            manage_requests: true,
            ..AdminFlags::default()
        },
    )
    .await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/admin/requests/{}/complete", uuid::Uuid::new_v4()))
        .header(header::AUTHORIZATION, admin_bearer(&admin))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
