use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::QUESTIONS_PER_PAGE,
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuestion, Question},
        dto::request::QuestionRequest,
    },
    repositories::{CategoryRepository, QuestionRepository},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Page `page` (1-based) of questions ordered by id. An empty page is
    /// reported as not found.
    pub async fn list_page(&self, page: i64) -> AppResult<QuestionPage> {
        let offset = page
            .checked_sub(1)
            .filter(|p| *p >= 0)
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
            .ok_or_else(|| AppError::NotFound(format!("Page {} of questions", page)))?;

        let (questions, total_questions) = self.questions.list(offset, QUESTIONS_PER_PAGE).await?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!("Page {} of questions", page)));
        }

        Ok(QuestionPage {
            questions,
            total_questions,
        })
    }

    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id '{}' not found",
                category_id
            )));
        }

        self.questions.find_by_category(category_id).await
    }

    pub async fn get_question(&self, id: i32) -> AppResult<Question> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn create_question(&self, request: QuestionRequest) -> AppResult<Question> {
        let draft = self.checked_draft(request).await?;
        let question = self.questions.create(draft).await?;

        log::info!(
            "Created question {} in category {}",
            question.id,
            question.category
        );
        Ok(question)
    }

    /// Replaces every field of question `id`.
    pub async fn update_question(&self, id: i32, request: QuestionRequest) -> AppResult<Question> {
        let draft = self.checked_draft(request).await?;
        let question = self.questions.update(id, draft).await?;

        log::info!("Updated question {}", id);
        Ok(question)
    }

    pub async fn delete_question(&self, id: i32) -> AppResult<()> {
        self.questions.delete(id).await?;
        log::info!("Deleted question {}", id);
        Ok(())
    }

    async fn checked_draft(&self, request: QuestionRequest) -> AppResult<NewQuestion> {
        request.validate()?;

        if self.categories.find_by_id(request.category).await?.is_none() {
            return Err(AppError::Unprocessable(format!(
                "Category with id '{}' does not exist",
                request.category
            )));
        }

        Ok(request.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Category,
        repositories::{MockCategoryRepository, MockQuestionRepository},
        test_utils::fixtures,
    };
    use mockall::predicate::eq;

    fn service(
        questions: MockQuestionRepository,
        categories: MockCategoryRepository,
    ) -> QuestionService {
        QuestionService::new(Arc::new(questions), Arc::new(categories))
    }

    #[tokio::test]
    async fn test_list_page_computes_offset() {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_list()
            .with(eq(20), eq(QUESTIONS_PER_PAGE))
            .times(1)
            .returning(|_, _| Ok((fixtures::questions(3, 1), 23)));

        let page = service(questions, MockCategoryRepository::new())
            .list_page(3)
            .await
            .unwrap();

        assert_eq!(page.questions.len(), 3);
        assert_eq!(page.total_questions, 23);
    }

    #[tokio::test]
    async fn test_list_page_rejects_non_positive_pages_without_querying() {
        let mut questions = MockQuestionRepository::new();
        questions.expect_list().never();

        let service = service(questions, MockCategoryRepository::new());

        assert!(matches!(service.list_page(0).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.list_page(-1000).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.list_page(i64::MIN).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_page_beyond_range_is_not_found() {
        let mut questions = MockQuestionRepository::new();
        questions.expect_list().returning(|_, _| Ok((vec![], 19)));

        let result = service(questions, MockCategoryRepository::new())
            .list_page(3)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_question_checks_category() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .with(eq(9))
            .returning(|_| Ok(None));
        let mut questions = MockQuestionRepository::new();
        questions.expect_create().never();

        let request = QuestionRequest {
            category: 9,
            ..fixtures::question_request(1)
        };
        let result = service(questions, categories).create_question(request).await;

        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn test_create_question_validates_before_lookup() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().never();

        let request = QuestionRequest {
            difficulty: 42,
            ..fixtures::question_request(1)
        };
        let result = service(MockQuestionRepository::new(), categories)
            .create_question(request)
            .await;

        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn test_create_question_persists_trimmed_draft() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(|id| Ok(Some(Category::new(id, "Science"))));
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_create()
            .withf(|draft| draft.question == "Test question" && draft.category == 1)
            .returning(|draft| Ok(draft.with_id(42)));

        let request = QuestionRequest {
            question: " Test question ".to_string(),
            ..fixtures::question_request(1)
        };
        let created = service(questions, categories)
            .create_question(request)
            .await
            .unwrap();

        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_list_by_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));
        let mut questions = MockQuestionRepository::new();
        questions.expect_find_by_category().never();

        let result = service(questions, categories).list_by_category(1000).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_question_propagates_not_found() {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_delete()
            .with(eq(-1000))
            .returning(|id| Err(AppError::NotFound(format!("Question with id '{}' not found", id))));

        let result = service(questions, MockCategoryRepository::new())
            .delete_question(-1000)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
