pub mod pagination;

pub use pagination::QUESTIONS_PER_PAGE;
