use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    handlers::json_body,
    models::dto::{request::QuizRequest, response::QuizResponse},
};

/// Any verified token may play; no specific permission is needed.
pub async fn play_quiz(
    auth: AuthenticatedUser,
    state: web::Data<AppState>,
    payload: Result<web::Json<QuizRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let request = json_body(payload)?;

    let question = state
        .quiz_service
        .next_question(request.quiz_category.id, &request.previous_questions)
        .await?;

    if question.is_none() {
        log::info!(
            "Quiz exhausted for '{}' in category {}",
            auth.0.subject,
            request.quiz_category.id
        );
    }

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}
