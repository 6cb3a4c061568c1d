use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::comment::CreateCommentParams;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments on a review, newest first
    pub async fn get_by_review_id(
        &self,
        review_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Creates a new comment with zero votes and a server-assigned timestamp
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            body: ActiveValue::Set(params.body),
            votes: ActiveValue::Set(0),
            author: ActiveValue::Set(params.author),
            review_id: ActiveValue::Set(params.review_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adjusts a comment's vote count by the given amount and returns the
    /// updated row.
    ///
    /// Applies a single atomic `votes = votes + n` column expression so
    /// concurrent adjustments cannot lose updates.
    ///
    /// # Returns
    /// - `Ok(Some(comment))` - The updated comment
    /// - `Ok(None)` - No comment with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_votes(
        &self,
        id: i32,
        inc_votes: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                Expr::col(entity::comment::Column::Votes).add(inc_votes),
            )
            .filter(entity::comment::Column::CommentId.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Deletes a comment by id.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 0 when no comment with that id exists
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
