#[cfg(test)]
pub mod fixtures {
    use crate::models::{domain::Question, dto::request::QuestionRequest};

    /// A valid create/update body for `category`.
    pub fn question_request(category: i32) -> QuestionRequest {
        QuestionRequest {
            question: "Test question".to_string(),
            answer: "Test answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    /// `count` questions with ids starting at 1, all in `category`.
    pub fn questions(count: i32, category: i32) -> Vec<Question> {
        (1..=count)
            .map(|id| Question {
                id,
                question: format!("Question {}", id),
                answer: format!("Answer {}", id),
                category,
                difficulty: (id % 5) + 1,
            })
            .collect()
    }
}

#[cfg(test)]
pub mod tokens {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::SecretString;
    use serde::Serialize;

    pub const TEST_AUDIENCE: &str = "trivia";
    pub const TEST_ISSUER: &str = "https://trivia.test/";
    const TEST_SECRET: &str = "test_jwt_secret_key_for_trivia_api_only";

    pub fn test_secret() -> SecretString {
        SecretString::from(TEST_SECRET.to_string())
    }

    pub fn mint<T: Serialize>(claims: &T) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("test token should encode")
    }

    fn token_with(subject: &str, permissions: &[&str]) -> String {
        mint(&serde_json::json!({
            "sub": subject,
            "aud": TEST_AUDIENCE,
            "iss": TEST_ISSUER,
            "iat": jsonwebtoken::get_current_timestamp(),
            "exp": jsonwebtoken::get_current_timestamp() + 3600,
            "permissions": permissions,
        }))
    }

    pub fn admin_token() -> String {
        token_with(
            "auth0|admin",
            &["get:questions", "post:question", "patch:question", "delete:question"],
        )
    }

    pub fn player_token() -> String {
        token_with("auth0|player", &["get:questions"])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_questions() {
        let questions = questions(3, 2);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].id, 1);
        assert!(questions.iter().all(|q| q.category == 2));
    }

    #[test]
    fn test_fixtures_question_request() {
        let request = question_request(4);
        assert_eq!(request.category, 4);
        assert_eq!(request.difficulty, 1);
    }
}
