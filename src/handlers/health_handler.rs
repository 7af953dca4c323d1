use actix_web::{get, HttpResponse};

use crate::models::dto::response::HealthResponse;

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        message: "Quiz generator API is running",
    })
}
