use sea_orm::DatabaseConnection;

use crate::{
    data::comment::CommentRepository, error::AppError, model::comment::CreateCommentParams,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the comments on a review, newest first.
    ///
    /// An empty comment set is reported as a missing review; a valid review
    /// with zero comments is not distinguished from an unknown id.
    pub async fn list_for_review(
        &self,
        review_id: i32,
    ) -> Result<Vec<entity::comment::Model>, AppError> {
        let repo = CommentRepository::new(self.db);

        let comments = repo.get_by_review_id(review_id).await?;

        if comments.is_empty() {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        Ok(comments)
    }

    /// Creates a comment on a review.
    ///
    /// Unknown author or review id surface as foreign key violations (404).
    /// Votes start at zero and the timestamp is server-assigned.
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, AppError> {
        let repo = CommentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Adjusts a comment's votes additively and returns the updated row
    pub async fn adjust_votes(
        &self,
        id: i32,
        inc_votes: i32,
    ) -> Result<entity::comment::Model, AppError> {
        let repo = CommentRepository::new(self.db);

        repo.adjust_votes(id, inc_votes)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Deletes a comment by id.
    ///
    /// Deleting an id that never existed still reports success; no row is
    /// affected.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
