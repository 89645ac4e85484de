use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

const COLUMNS: &str = "id, question, answer, category, difficulty";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: NewQuestion) -> AppResult<Question>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>>;
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    /// A window of questions ordered by id, plus the overall count.
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Question>, i64)>;
    async fn find_by_category(&self, category_id: i32) -> AppResult<Vec<Question>>;
    async fn update(&self, id: i32, question: NewQuestion) -> AppResult<Question>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );

        let created = sqlx::query_as::<_, Question>(&sql)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let sql = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Question>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!("SELECT {COLUMNS} FROM questions ORDER BY id OFFSET $1 LIMIT $2");
        let items = sqlx::query_as::<_, Question>(&sql)
            .bind(offset.max(0))
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;

        Ok((items, total))
    }

    async fn find_by_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn update(&self, id: i32, question: NewQuestion) -> AppResult<Question> {
        let sql = format!(
            "UPDATE questions SET question = $1, answer = $2, category = $3, difficulty = $4 \
             WHERE id = $5 RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, Question>(&sql)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        }

        Ok(())
    }
}
