use std::{collections::HashSet, sync::Arc};

use rand::{seq::IndexedRandom, Rng};

use crate::{errors::AppResult, models::domain::Question, repositories::QuestionRepository};

/// Category id that stands for "every category" when playing.
pub const ANY_CATEGORY: i32 = 0;

pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// A random question from `category_id` that is not in `previous`, or
    /// `None` once the category is exhausted.
    pub async fn next_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> AppResult<Option<Question>> {
        let candidates = if category_id == ANY_CATEGORY {
            self.questions.find_all().await?
        } else {
            self.questions.find_by_category(category_id).await?
        };

        let question = pick_unseen(candidates, previous, &mut rand::rng());
        log::debug!(
            "Quiz in category {} after {} question(s) served {:?}",
            category_id,
            previous.len(),
            question.as_ref().map(|q| q.id)
        );
        Ok(question)
    }
}

/// Uniformly picks one of `candidates` whose id is not in `previous`.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i32],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    unseen.choose(rng).cloned()
}
