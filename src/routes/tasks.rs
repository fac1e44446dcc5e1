use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{CompletionUpdate, CreatedTask, StatusUpdate, TaskInput, TaskListItem, TaskQuery},
    repo::task_repo,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// Retrieves the tasks on the authenticated user's boards.
///
/// ## Query Parameters:
/// - `board_id` (optional): only tasks on this board. A board owned by someone else
///   yields an empty list.
/// - `status` (optional): exact status match.
/// - `sort_by` (optional): `priority` (default) or `due_date`.
///
/// ## Responses:
/// - `200 OK`: a JSON array of tasks, `due_date` formatted as `YYYY-MM-DD HH:MM`.
#[get("/tasks")]
pub async fn get_tasks(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    query_params: web::Query<TaskQuery>,
) -> Result<impl Responder, AppError> {
    let mut conn = pool.acquire().await?;
    let tasks: Vec<TaskListItem> = task_repo::list(&mut conn, user_id.0, &query_params)
        .await?
        .into_iter()
        .map(TaskListItem::from)
        .collect();

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task on one of the authenticated user's boards.
///
/// ## Request Body:
/// - `board_id`: the target board (must be owned by the caller).
/// - `title`: required.
/// - `description`, `priority` (optional).
/// - `due_date` (optional): `YYYY-MM-DDTHH:MM`.
///
/// ## Responses:
/// - `201 Created`: the new task, `due_date` formatted as `YYYY-MM-DD HH:MM:SS`.
/// - `404 Not Found`: the board does not exist or belongs to another user.
/// - `422 Unprocessable Entity`: missing title or unparseable due date.
#[post("/tasks")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let new_task = task_data.into_inner().into_new_task()?;

    let mut tx = pool.begin().await?;
    let task = task_repo::create(&mut tx, user_id.0, new_task).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(CreatedTask::from(task)))
}

#[delete("/tasks/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let mut tx = pool.begin().await?;
    task_repo::delete(&mut tx, user_id.0, task_id.into_inner()).await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted" })))
}

/// Marks a task complete or incomplete. A body without `completed` changes nothing.
#[put("/tasks/{id}")]
pub async fn update_task_completion(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<i32>,
    update: web::Json<CompletionUpdate>,
) -> Result<impl Responder, AppError> {
    let mut tx = pool.begin().await?;
    let task =
        task_repo::update_completion(&mut tx, user_id.0, task_id.into_inner(), update.completed)
            .await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "id": task.id, "completed": task.completed })))
}

/// Replaces a task's status label. A body without `status` changes nothing.
#[put("/tasks/{id}/status")]
pub async fn update_task_status(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<i32>,
    update: web::Json<StatusUpdate>,
) -> Result<impl Responder, AppError> {
    let mut tx = pool.begin().await?;
    let task = task_repo::update_status(
        &mut tx,
        user_id.0,
        task_id.into_inner(),
        update.into_inner().status,
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({ "id": task.id, "status": task.status })))
}
