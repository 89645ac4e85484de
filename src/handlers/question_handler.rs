use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_permission, AuthenticatedUser, Permission},
    errors::AppError,
    handlers::json_body,
    models::dto::{
        request::{PaginationParams, QuestionRequest},
        response::{QuestionCreatedResponse, QuestionListResponse, QuestionUpdatedResponse},
    },
};

pub async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let page = state.question_service.list_page(query.page()).await?;
    let categories = state.category_service.get_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories,
        current_category: None,
    }))
}

pub async fn create_question(
    auth: AuthenticatedUser,
    state: web::Data<AppState>,
    payload: Result<web::Json<QuestionRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, Permission::PostQuestion)?;

    let request = json_body(payload)?;
    let question = state.question_service.create_question(request).await?;

    Ok(HttpResponse::Created().json(QuestionCreatedResponse {
        success: true,
        id: question.id,
    }))
}

pub async fn update_question(
    auth: AuthenticatedUser,
    state: web::Data<AppState>,
    question_id: web::Path<i32>,
    payload: Result<web::Json<QuestionRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, Permission::PatchQuestion)?;

    // An unknown id is reported before anything is said about the body.
    let existing = state.question_service.get_question(*question_id).await?;
    let request = json_body(payload)?;
    let question = state
        .question_service
        .update_question(existing.id, request)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionUpdatedResponse {
        success: true,
        question,
    }))
}

pub async fn delete_question(
    auth: AuthenticatedUser,
    state: web::Data<AppState>,
    question_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, Permission::DeleteQuestion)?;

    state.question_service.delete_question(*question_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
