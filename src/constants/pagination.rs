/// Questions served per page by `GET /questions`.
pub const QUESTIONS_PER_PAGE: i64 = 10;
