use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{domain::BatchRequest, dto::request::GenerateQuizRequest},
};

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();

    let batch_request = BatchRequest::try_from(request.into_inner()).inspect_err(|err| {
        log::info!("[{request_id}] rejected quiz request: {err}");
    })?;

    let response = state
        .quiz_generator
        .generate(&batch_request)
        .await
        .inspect_err(|err| {
            log::error!(
                "[{request_id}] quiz generation for '{}' failed: {err}",
                batch_request.topic
            );
        })?;

    Ok(HttpResponse::Ok().json(response))
}
