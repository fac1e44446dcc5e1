use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Liveness check; listed in the middleware's public paths.
#[get("/health")]
pub async fn health() -> impl Responder {
    web::Json(HealthStatus {
        status: "ok",
        timestamp: Utc::now(),
    })
}
