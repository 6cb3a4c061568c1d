//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, category, review) =
//!         factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let review = factory::review::ReviewFactory::new(&db, &user.username, &category.slug)
//!     .title("Jenga")
//!     .votes(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `review` - Create review entities
//! - `comment` - Create comment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod comment;
pub mod helpers;
pub mod review;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use comment::create_comment;
pub use review::create_review;
pub use user::create_user;
