mod common;

use actix_web::{http::StatusCode, test};
use common::{authed, cleanup_user, init_app, register_and_login, send, test_pool, unique_email};
use pretty_assertions::assert_eq;
use serde_json::json;

#[actix_rt::test]
async fn test_register_and_login_flow() {
    let Some(pool) = test_pool().await else { return };
    let app = init_app(pool.clone()).await;
    let email = unique_email("register");

    let register_payload = json!({ "email": email, "password": "Password123!" });
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&register_payload)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");

    // Same email again is a conflict, reported as 400.
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&register_payload)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "Password123!" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().expect("access_token").to_string();
    assert!(!token.is_empty());

    let (status, body) = send(&app, authed(test::TestRequest::get().uri("/user-info"), &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": email }));

    cleanup_user(&pool, &email).await;
}

#[actix_rt::test]
async fn test_login_rejects_bad_credentials() {
    let Some(pool) = test_pool().await else { return };
    let app = init_app(pool.clone()).await;
    let email = unique_email("login");
    register_and_login(&app, &email, "Password123!").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "wrong-password" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": unique_email("nobody"), "password": "Password123!" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    cleanup_user(&pool, &email).await;
}

#[actix_rt::test]
async fn test_register_validates_payload() {
    let Some(pool) = test_pool().await else { return };
    let app = init_app(pool).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": "not-an-email", "password": "Password123!" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": unique_email("short"), "password": "123" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_user_info_for_deleted_user_is_not_found() {
    let Some(pool) = test_pool().await else { return };
    let app = init_app(pool.clone()).await;
    let email = unique_email("ghost");
    let token = register_and_login(&app, &email, "Password123!").await;

    cleanup_user(&pool, &email).await;

    let (status, body) = send(&app, authed(test::TestRequest::get().uri("/user-info"), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[actix_rt::test]
async fn test_protected_routes_require_token() {
    let Some(pool) = test_pool().await else { return };
    let app = init_app(pool).await;

    for req in [
        test::TestRequest::get().uri("/user-info").to_request(),
        test::TestRequest::get().uri("/boards").to_request(),
        test::TestRequest::get().uri("/tasks").to_request(),
        test::TestRequest::delete().uri("/boards/1").to_request(),
        test::TestRequest::put()
            .uri("/tasks/1/status")
            .set_json(json!({ "status": "done" }))
            .to_request(),
    ] {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].is_string());
    }
}
