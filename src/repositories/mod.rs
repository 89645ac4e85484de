pub mod category_repository;
pub mod question_repository;

pub use category_repository::{CategoryRepository, PgCategoryRepository};
pub use question_repository::{PgQuestionRepository, QuestionRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
