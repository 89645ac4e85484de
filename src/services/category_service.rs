use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::response::{category_map, CategoryMap},
    repositories::CategoryRepository,
};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_categories(&self) -> AppResult<CategoryMap> {
        let categories = self.repository.find_all().await?;
        Ok(category_map(categories))
    }
}
