pub mod category_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::{error::PathError, error::QueryPayloadError, web, HttpRequest, HttpResponse};

use crate::errors::{AppError, AppResult};

pub use category_handler::{get_categories, get_questions_by_category};
pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{create_question, delete_question, list_questions, update_question};
pub use quiz_handler::play_quiz;

/// Registers every route. Verbs a resource does not serve answer 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(health_check)
        .service(health_check_ready)
        .service(
            web::resource("/categories")
                .route(web::get().to(get_categories))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/categories/{category_id}/questions")
                .route(web::get().to(get_questions_by_category))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(list_questions))
                .route(web::post().to(create_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions/{question_id}")
                .route(web::patch().to(update_question))
                .route(web::delete().to(delete_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(play_quiz))
                .default_service(web::to(method_not_allowed)),
        );
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Fallback for paths no resource matches.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("No resource at {}", req.path())))
}

pub(crate) fn json_body<T>(payload: Result<web::Json<T>, actix_web::Error>) -> AppResult<T> {
    payload
        .map(web::Json::into_inner)
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
