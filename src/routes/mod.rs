pub mod auth;
pub mod boards;
pub mod health;
pub mod tasks;

use actix_web::{error, web, HttpRequest};

use crate::error::AppError;

/// Registers every endpoint plus the body/query extractor configuration.
///
/// Malformed JSON bodies and query strings surface as `AppError::ValidationError`,
/// and unparseable path ids as `AppError::NotFound`, so they share the
/// `{"message": ...}` error shape.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(health::health)
        .service(auth::register)
        .service(auth::login)
        .service(auth::user_info)
        .service(boards::get_boards)
        .service(boards::create_board)
        .service(boards::delete_board)
        .service(tasks::get_tasks)
        .service(tasks::create_task)
        .service(tasks::delete_task)
        .service(tasks::update_task_status)
        .service(tasks::update_task_completion);
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path {}: {}", req.path(), err);
    AppError::NotFound("Resource not found".into()).into()
}
