use crate::{
    auth::{service, AuthenticatedUserId, LoginRequest, LoginResponse, RegisterRequest, TokenIssuer},
    error::AppError,
    models::UserInfo,
    repo::user_repo,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Returns `201` on success and `400` when the email is already taken.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let mut tx = pool.begin().await?;
    service::register(&mut tx, &register_data.email, &register_data.password).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(json!({ "message": "User registered successfully" })))
}

/// Login user
///
/// Exchanges valid credentials for a bearer token.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    issuer: web::Data<TokenIssuer>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let mut conn = pool.acquire().await?;
    let access_token = service::login(&mut conn, &issuer, &login_data.email, &login_data.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}

/// Email of the user the token was issued for.
#[get("/user-info")]
pub async fn user_info(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let mut conn = pool.acquire().await?;
    let user = user_repo::find_by_id(&mut conn, user_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(UserInfo::from(user)))
}
