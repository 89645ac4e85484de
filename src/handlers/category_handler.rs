use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{CategoriesResponse, QuestionListResponse},
};

pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.category_service.get_categories().await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

pub async fn get_questions_by_category(
    state: web::Data<AppState>,
    category_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let category_id = category_id.into_inner();
    let questions = state.question_service.list_by_category(category_id).await?;
    let categories = state.category_service.get_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        categories,
        current_category: Some(category_id),
    }))
}
