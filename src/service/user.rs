use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        repo.get_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
