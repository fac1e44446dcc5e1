//! Credential checks behind `/register` and `/login`.

use sqlx::PgConnection;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenIssuer;
use crate::error::AppError;
use crate::repo::user_repo;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Stores a new user with a salted password hash.
///
/// Fails with `AppError::Conflict` when the email is already registered, including
/// the case where a concurrent registration wins the race to the unique index.
pub async fn register(conn: &mut PgConnection, email: &str, password: &str) -> Result<i32, AppError> {
    if user_repo::find_by_email(&mut *conn, email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = hash_password(password)?;
    match user_repo::insert(&mut *conn, email, &password_hash).await {
        Ok(user_id) => {
            log::info!("Registered user {}", user_id);
            Ok(user_id)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Err(AppError::Conflict("User already exists".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks an email/password pair and issues an access token for the matching user.
pub async fn login(
    conn: &mut PgConnection,
    issuer: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    let invalid = || AppError::Unauthorized("Invalid email or password".into());

    let user = user_repo::find_by_email(&mut *conn, email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(password, &user.password_hash)? {
        log::warn!("Failed login attempt for user {}", user.id);
        return Err(invalid());
    }

    issuer.generate_token(user.id)
}
