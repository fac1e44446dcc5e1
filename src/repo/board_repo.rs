use sqlx::PgConnection;

use crate::error::AppError;
use crate::models::Board;
use crate::repo::ownership::owned_board;

pub async fn list(conn: &mut PgConnection, owner_id: i32) -> Result<Vec<Board>, AppError> {
    let boards = sqlx::query_as::<_, Board>("SELECT id, name, user_id FROM boards WHERE user_id = $1 ORDER BY id")
        .bind(owner_id)
        .fetch_all(conn)
        .await?;
    Ok(boards)
}

pub async fn create(conn: &mut PgConnection, owner_id: i32, name: &str) -> Result<Board, AppError> {
    let board = sqlx::query_as::<_, Board>(
        "INSERT INTO boards (name, user_id) VALUES ($1, $2) RETURNING id, name, user_id",
    )
    .bind(name)
    .bind(owner_id)
    .fetch_one(conn)
    .await?;
    Ok(board)
}

/// Deletes a board and every task on it. Returns the number of tasks removed.
///
/// Must run inside a transaction: the child rows go first, then the board, and the
/// caller's commit publishes both or neither.
pub async fn delete(conn: &mut PgConnection, owner_id: i32, board_id: i32) -> Result<u64, AppError> {
    let board = owned_board(&mut *conn, owner_id, board_id).await?;

    let removed_tasks = sqlx::query("DELETE FROM tasks WHERE board_id = $1")
        .bind(board.id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM boards WHERE id = $1")
        .bind(board.id)
        .execute(&mut *conn)
        .await?;

    Ok(removed_tasks)
}
