//! Review factory for creating test review entities.
//!
//! Reviews reference a user (owner) and a category, so the factory takes both
//! as constructor arguments. Use `helpers::create_review_with_dependencies` to
//! create the full chain in one call.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, &user.username, &category.slug)
///     .title("Jenga")
///     .votes(5)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    designer: Option<String>,
    owner: String,
    review_img_url: String,
    review_body: String,
    category: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Review {id}"` where id is auto-incremented
    /// - designer: `Some("Designer {id}")`
    /// - review_img_url / review_body: placeholder content
    /// - votes: `0`
    /// - created_at: current UTC timestamp
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner` - Username of an existing user
    /// - `category` - Slug of an existing category
    ///
    /// # Returns
    /// - `ReviewFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        owner: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Review {}", id),
            designer: Some(format!("Designer {}", id)),
            owner: owner.into(),
            review_img_url: format!("https://images.example.com/review_{}.png", id),
            review_body: format!("Body of review {}", id),
            category: category.into(),
            votes: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the title for the review.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the designer for the review. Pass `None` to leave it unset.
    pub fn designer(mut self, designer: Option<String>) -> Self {
        self.designer = designer;
        self
    }

    /// Sets the review body text.
    pub fn review_body(mut self, review_body: impl Into<String>) -> Self {
        self.review_body = review_body.into();
        self
    }

    /// Sets the vote count for the review.
    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Sets the creation timestamp, useful for testing chronological ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert (including foreign key
    ///   violations for unknown owner or category)
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(self.title),
            designer: ActiveValue::Set(self.designer),
            owner: ActiveValue::Set(self.owner),
            review_img_url: ActiveValue::Set(self.review_img_url),
            review_body: ActiveValue::Set(self.review_body),
            category: ActiveValue::Set(self.category),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given owner and category.
///
/// Shorthand for `ReviewFactory::new(db, owner, category).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner` - Username of an existing user
/// - `category` - Slug of an existing category
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    owner: impl Into<String>,
    category: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, owner, category).build().await
}
