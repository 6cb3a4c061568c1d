//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as review owner)
/// 2. Category
/// 3. Review
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let review = crate::factory::review::create_review(db, &user.username, &category.slug).await?;

    Ok((user, category, review))
}

/// Creates a comment with all dependencies.
///
/// Builds the full chain: user, category, review, then a comment on that
/// review authored by the same user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, review, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::review::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (user, category, review) = create_review_with_dependencies(db).await?;
    let comment =
        crate::factory::comment::create_comment(db, review.review_id, &user.username).await?;

    Ok((user, category, review, comment))
}
