//! Resolves boards and tasks only when the requesting user owns them.
//!
//! A resource owned by someone else is indistinguishable from a missing one: both
//! produce `AppError::NotFound`, so callers cannot tell which ids exist.

use sqlx::PgConnection;

use crate::error::AppError;
use crate::models::{Board, Task};
use crate::repo::task_repo::TASK_COLUMNS;

pub fn board_not_found() -> AppError {
    AppError::NotFound("Board not found or access denied".into())
}

pub fn task_not_found() -> AppError {
    AppError::NotFound("Task not found or access denied".into())
}

pub async fn owned_board(conn: &mut PgConnection, user_id: i32, board_id: i32) -> Result<Board, AppError> {
    sqlx::query_as::<_, Board>("SELECT id, name, user_id FROM boards WHERE id = $1 AND user_id = $2")
        .bind(board_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(board_not_found)
}

pub async fn owned_task(conn: &mut PgConnection, user_id: i32, task_id: i32) -> Result<Task, AppError> {
    let sql = format!(
        "SELECT {TASK_COLUMNS} FROM tasks t JOIN boards b ON b.id = t.board_id \
         WHERE t.id = $1 AND b.user_id = $2"
    );
    sqlx::query_as::<_, Task>(&sql)
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(task_not_found)
}
