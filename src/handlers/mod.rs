pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::generate_quiz;

/// Registers every route plus the JSON extractor settings shared by them.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_quiz)
        .service(health_check);
}

/// Body-decoding failures are reported as JSON 400s like every other
/// request error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InvalidRequest(format!("Invalid request body: {err}")).into()
    })
}
