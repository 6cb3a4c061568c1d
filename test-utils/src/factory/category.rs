//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .slug("dexterity")
///     .description("Games involving physical skill")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    description: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"category_{id}"` where id is auto-incremented
    /// - description: `"Description for category {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CategoryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("category_{}", id),
            description: format!("Description for category {}", id),
        }
    }

    /// Sets the slug for the category.
    ///
    /// # Arguments
    /// - `slug` - Unique slug acting as the primary key
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the description for the category.
    ///
    /// # Arguments
    /// - `description` - Human-readable category description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates a category with a specific slug.
///
/// Shorthand for `CategoryFactory::new(db).slug(slug).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `slug` - Unique slug for the category
///
/// # Returns
/// - `Ok(entity::category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_category_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).slug(slug).build().await
}
