#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI32, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::SecretString;
use tokio::sync::RwLock;

use trivia_api::{
    app_state::AppState,
    auth::JwtVerifier,
    db::HealthCheck,
    errors::{AppError, AppResult},
    models::domain::{Category, NewQuestion, Question},
    repositories::{CategoryRepository, QuestionRepository},
};

pub const AUDIENCE: &str = "trivia";
pub const ISSUER: &str = "https://trivia.test/";
const SECRET: &str = "integration_test_secret_for_trivia_api";

/// Rows shared by both in-memory repositories so a category delete can
/// cascade into its questions.
#[derive(Default)]
pub struct InMemoryStore {
    categories: RwLock<BTreeMap<i32, Category>>,
    questions: RwLock<BTreeMap<i32, Question>>,
    next_category_id: AtomicI32,
    next_question_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, kind: &str) -> AppResult<Category> {
        let id = self.store.next_category_id.fetch_add(1, Ordering::SeqCst) + 1;
        let category = Category::new(id, kind);
        self.store
            .categories
            .write()
            .await
            .insert(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.store.categories.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.store.categories.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.store.categories.write().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Category with id '{}' not found", id)));
        }
        self.store
            .questions
            .write()
            .await
            .retain(|_, q| q.category != id);
        Ok(())
    }
}

pub struct InMemoryQuestionRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryQuestionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    async fn ensure_category(&self, category: i32) -> AppResult<()> {
        if self.store.categories.read().await.contains_key(&category) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(format!(
                "foreign key violation: category {}",
                category
            )))
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        self.ensure_category(question.category).await?;
        let id = self.store.next_question_id.fetch_add(1, Ordering::SeqCst) + 1;
        let question = question.with_id(id);
        self.store
            .questions
            .write()
            .await
            .insert(id, question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        Ok(self.store.questions.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.store.questions.read().await.values().cloned().collect())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Question>, i64)> {
        let questions = self.store.questions.read().await;
        let total = questions.len() as i64;
        let page = questions
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn find_by_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        Ok(self
            .store
            .questions
            .read()
            .await
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, question: NewQuestion) -> AppResult<Question> {
        self.ensure_category(question.category).await?;
        let mut questions = self.store.questions.write().await;
        let Some(slot) = questions.get_mut(&id) else {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        };
        *slot = question.with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        match self.store.questions.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Question with id '{}' not found", id))),
        }
    }
}

pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthCheck for StaticHealth {
    async fn health_check(&self) -> AppResult<()> {
        if self.0 {
            Ok(())
        } else {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }
}

/// Per-test world: fresh store, repositories and application state.
pub struct TestContext {
    pub categories: Arc<InMemoryCategoryRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_health(true)
    }

    pub fn with_health(healthy: bool) -> Self {
        let store = InMemoryStore::new();
        let categories = Arc::new(InMemoryCategoryRepository::new(store.clone()));
        let questions = Arc::new(InMemoryQuestionRepository::new(store));
        let verifier = JwtVerifier::with_secret(
            &SecretString::from(SECRET.to_string()),
            AUDIENCE,
            Some(ISSUER),
        );

        let state = AppState::from_parts(
            categories.clone(),
            questions.clone(),
            Arc::new(verifier),
            Arc::new(StaticHealth(healthy)),
        );

        Self {
            categories,
            questions,
            state,
        }
    }

    pub async fn category(&self, kind: &str) -> Category {
        self.categories.create(kind).await.expect("category fixture")
    }

    pub async fn question(&self, category: i32, text: &str) -> Question {
        self.questions
            .create(NewQuestion {
                question: text.to_string(),
                answer: format!("Answer to {}", text),
                category,
                difficulty: 2,
            })
            .await
            .expect("question fixture")
    }
}

pub fn mint(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token should encode")
}

fn token_with(subject: &str, permissions: &[&str]) -> String {
    mint(serde_json::json!({
        "sub": subject,
        "aud": AUDIENCE,
        "iss": ISSUER,
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

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Builds the service exactly as `main` wires it, minus CORS and logging.
#[macro_export]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(trivia_api::middleware::RequestIdMiddleware)
                .configure(trivia_api::handlers::configure)
                .default_service(actix_web::web::to(trivia_api::handlers::not_found)),
        )
        .await
    };
}
