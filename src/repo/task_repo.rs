use sqlx::PgConnection;

use crate::error::AppError;
use crate::models::task::{PRIORITY_RANKS, UNRANKED_PRIORITY};
use crate::models::{NewTask, Task, TaskQuery, TaskSort, DEFAULT_TASK_STATUS};
use crate::repo::ownership::{owned_board, owned_task};

/// Task columns qualified with the `t` alias used by every task query.
pub const TASK_COLUMNS: &str =
    "t.id, t.board_id, t.title, t.description, t.due_date, t.priority, t.completed, t.status";

const RETURNING_COLUMNS: &str =
    "id, board_id, title, description, due_date, priority, completed, status";

/// `ORDER BY` body for a sort mode. `id` is the last key so equal rows keep a
/// stable order between reads.
pub fn order_clause(sort: TaskSort) -> String {
    match sort {
        TaskSort::Priority => {
            let mut rank = String::from("CASE t.priority");
            for (label, value) in PRIORITY_RANKS {
                rank.push_str(&format!(" WHEN '{}' THEN {}", label, value));
            }
            rank.push_str(&format!(" ELSE {} END", UNRANKED_PRIORITY));
            format!("{} ASC, t.due_date ASC, t.id ASC", rank)
        }
        // Tie-break compares the raw label, not the rank: "Medium" > "Low" > "High".
        TaskSort::DueDate => "t.due_date ASC, t.priority DESC, t.id ASC".to_string(),
        TaskSort::Insertion => "t.id ASC".to_string(),
    }
}

/// Builds the listing query. `$1` is always the owner id; the optional board and
/// status filters take the following placeholders in that order.
pub fn build_list_sql(query: &TaskQuery) -> String {
    let mut sql = format!(
        "SELECT {TASK_COLUMNS} FROM tasks t JOIN boards b ON b.id = t.board_id WHERE b.user_id = $1"
    );
    let mut param_count = 2;

    let mut conditions: Vec<String> = Vec::new();
    if query.board_id.is_some() {
        conditions.push(format!("t.board_id = ${}", param_count));
        param_count += 1;
    }
    if query.status_filter().is_some() {
        conditions.push(format!("t.status = ${}", param_count));
    }

    for condition in conditions {
        sql.push_str(" AND ");
        sql.push_str(&condition);
    }

    sql.push_str(" ORDER BY ");
    sql.push_str(&order_clause(query.sort()));
    sql
}

pub async fn list(conn: &mut PgConnection, owner_id: i32, query: &TaskQuery) -> Result<Vec<Task>, AppError> {
    let sql = build_list_sql(query);
    log::debug!("Listing tasks for user {}: {}", owner_id, sql);

    let mut query_builder = sqlx::query_as::<_, Task>(&sql).bind(owner_id);
    if let Some(board_id) = query.board_id {
        query_builder = query_builder.bind(board_id);
    }
    if let Some(status) = query.status_filter() {
        query_builder = query_builder.bind(status);
    }

    Ok(query_builder.fetch_all(conn).await?)
}

/// Inserts a task on a board the owner holds. Completion and status always start
/// at their defaults.
pub async fn create(conn: &mut PgConnection, owner_id: i32, task: NewTask) -> Result<Task, AppError> {
    let board = owned_board(&mut *conn, owner_id, task.board_id).await?;

    let sql = format!(
        "INSERT INTO tasks (board_id, title, description, due_date, priority, completed, status) \
         VALUES ($1, $2, $3, $4, $5, FALSE, $6) RETURNING {RETURNING_COLUMNS}"
    );
    let created = sqlx::query_as::<_, Task>(&sql)
        .bind(board.id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.due_date)
        .bind(task.priority)
        .bind(DEFAULT_TASK_STATUS)
        .fetch_one(conn)
        .await?;
    Ok(created)
}

pub async fn delete(conn: &mut PgConnection, owner_id: i32, task_id: i32) -> Result<(), AppError> {
    let task = owned_task(&mut *conn, owner_id, task_id).await?;
    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task.id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Sets `completed` when a value is given; otherwise returns the task untouched.
pub async fn update_completion(
    conn: &mut PgConnection,
    owner_id: i32,
    task_id: i32,
    completed: Option<bool>,
) -> Result<Task, AppError> {
    let task = owned_task(&mut *conn, owner_id, task_id).await?;
    let Some(completed) = completed else {
        return Ok(task);
    };

    let sql = format!("UPDATE tasks SET completed = $1 WHERE id = $2 RETURNING {RETURNING_COLUMNS}");
    let updated = sqlx::query_as::<_, Task>(&sql)
        .bind(completed)
        .bind(task.id)
        .fetch_one(conn)
        .await?;
    Ok(updated)
}

/// Sets `status` when a value is given; otherwise returns the task untouched.
/// Any label is accepted.
pub async fn update_status(
    conn: &mut PgConnection,
    owner_id: i32,
    task_id: i32,
    status: Option<String>,
) -> Result<Task, AppError> {
    let task = owned_task(&mut *conn, owner_id, task_id).await?;
    let Some(status) = status else {
        return Ok(task);
    };

    let sql = format!("UPDATE tasks SET status = $1 WHERE id = $2 RETURNING {RETURNING_COLUMNS}");
    let updated = sqlx::query_as::<_, Task>(&sql)
        .bind(status)
        .bind(task.id)
        .fetch_one(conn)
        .await?;
    Ok(updated)
}
