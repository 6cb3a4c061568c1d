use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, review::ReviewRepository},
    error::AppError,
    model::review::{
        CreateReviewParams, ListReviewsParams, ReviewRecord, ReviewSortKey, SortOrder,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists reviews with optional category filter and dynamic sort/order.
    ///
    /// Both query parameters are validated against their closed sets before
    /// any query is built: an unknown `sort_by` fails with "Invalid sort
    /// query", an unknown `order` with "Invalid order query" (both 400).
    /// Defaults are `created_at` / `DESC`.
    ///
    /// An empty result is ambiguous when a category filter was supplied: the
    /// category may exist with no reviews (an empty listing) or may not exist
    /// at all (404). The categories table is the authority for that
    /// distinction.
    pub async fn list(&self, params: ListReviewsParams) -> Result<Vec<ReviewRecord>, AppError> {
        let sort_by = match params.sort_by.as_deref() {
            None => ReviewSortKey::CreatedAt,
            Some(value) => ReviewSortKey::from_param(value)
                .ok_or_else(|| AppError::BadRequest("Invalid sort query".to_string()))?,
        };

        let order = match params.order.as_deref() {
            None => SortOrder::Desc,
            Some(value) => SortOrder::from_param(value)
                .ok_or_else(|| AppError::BadRequest("Invalid order query".to_string()))?,
        };

        let repo = ReviewRepository::new(self.db);

        let reviews = repo
            .get_all(params.category.as_deref(), sort_by, order)
            .await?;

        if reviews.is_empty() {
            if let Some(slug) = params.category.as_deref() {
                if !CategoryRepository::new(self.db).exists(slug).await? {
                    return Err(AppError::NotFound("Not found".to_string()));
                }
            }
        }

        Ok(reviews)
    }

    /// Gets a review by id with its comment count
    pub async fn get_by_id(&self, id: i32) -> Result<ReviewRecord, AppError> {
        let repo = ReviewRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    /// Creates a new review.
    ///
    /// The category must be non-empty; unknown owner or category surface as
    /// foreign key violations (404). The returned record carries a comment
    /// count of zero.
    pub async fn create(&self, params: CreateReviewParams) -> Result<ReviewRecord, AppError> {
        if params.category.is_empty() {
            return Err(AppError::BadRequest("Bad request".to_string()));
        }

        let repo = ReviewRepository::new(self.db);

        let review = repo.create(params).await?;

        Ok(ReviewRecord::from_new_entity(review))
    }

    /// Adjusts a review's votes additively and returns the updated record
    pub async fn adjust_votes(&self, id: i32, inc_votes: i32) -> Result<ReviewRecord, AppError> {
        let repo = ReviewRepository::new(self.db);

        if !repo.adjust_votes(id, inc_votes).await? {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        // The row was just updated, so a missing read-back is a server fault
        repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::InternalError(format!("review {} missing after vote update", id))
        })
    }
}
