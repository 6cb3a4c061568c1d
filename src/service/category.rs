use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository, error::AppError, model::category::CreateCategoryParams,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new category.
    ///
    /// The slug doubles as the primary key and must be non-empty. A duplicate
    /// slug surfaces as a uniqueness violation and maps to 409 Conflict.
    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, AppError> {
        if params.slug.is_empty() {
            return Err(AppError::BadRequest("Bad request".to_string()));
        }

        let repo = CategoryRepository::new(self.db);

        Ok(repo.create(params).await?)
    }
}
