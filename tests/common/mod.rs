#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::{header, StatusCode},
    test, web, App, Error,
};
use chrono::Duration;
use dotenv::dotenv;
use serde_json::{json, Value};
use sqlx::PgPool;
use taskboard::auth::{AuthMiddleware, LoginResponse, TokenIssuer};
use taskboard::{db, routes};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Connects to `DATABASE_URL` and applies migrations, or returns `None` when no
/// database is configured so the calling test can skip itself.
pub async fn test_pool() -> Option<PgPool> {
    dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping database-backed test");
            return None;
        }
    };
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_JWT_SECRET, Duration::minutes(15))
}

pub async fn init_app(
    pool: PgPool,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(issuer()))
            .wrap(AuthMiddleware::new(issuer()))
            .configure(routes::config),
    )
    .await
}

/// An email no other test run has used.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, uuid::Uuid::new_v4())
}

pub async fn cleanup_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}

/// Sends a request and returns its status and JSON body (`Value::Null` when empty).
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, body)
}

pub async fn register_and_login<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    let login: LoginResponse = serde_json::from_value(body).expect("login response");
    login.access_token
}

pub fn authed(req: test::TestRequest, token: &str) -> Request {
    req.insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request()
}

pub async fn create_board<S, B>(app: &S, token: &str, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = authed(
        test::TestRequest::post()
            .uri("/boards")
            .set_json(json!({ "name": name })),
        token,
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create board failed: {}", body);
    body["id"].as_i64().expect("board id")
}

pub async fn create_task<S, B>(app: &S, token: &str, payload: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = authed(
        test::TestRequest::post().uri("/tasks").set_json(payload),
        token,
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create task failed: {}", body);
    body
}

pub async fn list_tasks<S, B>(app: &S, token: &str, query: &str) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = authed(
        test::TestRequest::get().uri(&format!("/tasks{}", query)),
        token,
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "list tasks failed: {}", body);
    body.as_array().cloned().expect("task array")
}
