use std::sync::Arc;

use crate::{
    auth::TokenVerifier,
    config::Config,
    db::{Database, HealthCheck},
    errors::AppResult,
    repositories::{
        CategoryRepository, PgCategoryRepository, PgQuestionRepository, QuestionRepository,
    },
    services::{CategoryService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub async fn new(config: &Config, verifier: Arc<dyn TokenVerifier>) -> AppResult<Self> {
        let db = Database::connect(config).await?;
        db.ensure_schema().await?;

        let categories = Arc::new(PgCategoryRepository::new(&db));
        let questions = Arc::new(PgQuestionRepository::new(&db));

        Ok(Self::from_parts(categories, questions, verifier, Arc::new(db)))
    }

    pub fn from_parts(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
        verifier: Arc<dyn TokenVerifier>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            question_service: Arc::new(QuestionService::new(questions.clone(), categories)),
            quiz_service: Arc::new(QuizService::new(questions)),
            verifier,
            health,
        }
    }
}
