use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{BoardInput, BoardResponse},
    repo::board_repo,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Lists the caller's boards.
#[get("/boards")]
pub async fn get_boards(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let mut conn = pool.acquire().await?;
    let boards: Vec<BoardResponse> = board_repo::list(&mut conn, user_id.0)
        .await?
        .into_iter()
        .map(BoardResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(boards))
}

/// Creates a board owned by the caller.
///
/// ## Responses:
/// - `201 Created`: `{id, name}` of the new board.
/// - `422 Unprocessable Entity`: missing or blank name.
#[post("/boards")]
pub async fn create_board(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    board_data: web::Json<BoardInput>,
) -> Result<impl Responder, AppError> {
    board_data.validate()?;

    let mut tx = pool.begin().await?;
    let board = board_repo::create(&mut tx, user_id.0, &board_data.name).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(BoardResponse::from(board)))
}

/// Deletes a board together with all of its tasks.
///
/// ## Responses:
/// - `200 OK`: board and tasks removed.
/// - `404 Not Found`: the board does not exist or belongs to another user.
#[delete("/boards/{id}")]
pub async fn delete_board(
    pool: web::Data<PgPool>,
    user_id: AuthenticatedUserId,
    board_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let board_id = board_id.into_inner();

    let mut tx = pool.begin().await?;
    let removed_tasks = board_repo::delete(&mut tx, user_id.0, board_id).await?;
    tx.commit().await?;

    log::info!(
        "User {} deleted board {} and {} task(s)",
        user_id.0,
        board_id,
        removed_tasks
    );
    Ok(HttpResponse::Ok().json(json!({ "message": "Board deleted" })))
}
