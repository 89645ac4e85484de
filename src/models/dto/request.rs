use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::NewQuestion;

pub const MAX_DIFFICULTY: i32 = 5;

/// Body of `POST /questions` and `PATCH /questions/{id}`. All four fields
/// are required; a patch replaces every one of them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(custom(function = "not_blank"))]
    pub question: String,

    #[validate(custom(function = "not_blank"))]
    pub answer: String,

    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: i32,

    #[validate(range(min = 1, max = 5, message = "difficulty ranges from 1 to 5"))]
    pub difficulty: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl From<QuestionRequest> for NewQuestion {
    fn from(request: QuestionRequest) -> Self {
        NewQuestion {
            question: request.question.trim().to_string(),
            answer: request.answer.trim().to_string(),
            category: request.category,
            difficulty: request.difficulty,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    /// `0` selects from every category.
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PaginationParams {
    /// 1-based page number; anything that is not an integer reads as page 1.
    /// Integers too large for `i64` saturate, so they still land out of range.
    pub fn page(&self) -> i64 {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return 1;
        };

        match raw.parse::<i64>() {
            Ok(page) => page,
            Err(_) if is_integer(raw) => {
                if raw.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                }
            }
            Err(_) => 1,
        }
    }
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
