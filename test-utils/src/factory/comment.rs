//! Comment factory for creating test comment entities.
//!
//! Comments reference a review and an author, so the factory takes both as
//! constructor arguments. Use `helpers::create_comment_with_dependencies` to
//! create the full chain in one call.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let comment = CommentFactory::new(&db, review.review_id, &user.username)
///     .body("Great game!")
///     .votes(3)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    body: String,
    votes: i32,
    author: String,
    review_id: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"` where id is auto-incremented
    /// - votes: `0`
    /// - created_at: current UTC timestamp
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `review_id` - Id of an existing review
    /// - `author` - Username of an existing user
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, review_id: i32, author: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            body: format!("Comment {}", id),
            votes: 0,
            author: author.into(),
            review_id,
            created_at: Utc::now(),
        }
    }

    /// Sets the body text for the comment.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the vote count for the comment.
    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Sets the creation timestamp, useful for testing chronological ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert (including foreign key
    ///   violations for unknown author or review)
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            body: ActiveValue::Set(self.body),
            votes: ActiveValue::Set(self.votes),
            author: ActiveValue::Set(self.author),
            review_id: ActiveValue::Set(self.review_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values for the given review and author.
///
/// Shorthand for `CommentFactory::new(db, review_id, author).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `review_id` - Id of an existing review
/// - `author` - Username of an existing user
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    review_id: i32,
    author: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, review_id, author).build().await
}
