use serde::Serialize;
use sqlx::FromRow;

/// A registered account. The hash never leaves the server.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

/// Response body of `GET /user-info`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self { email: user.email }
    }
}
