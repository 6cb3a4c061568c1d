use chrono::Utc;
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::review::{CreateReviewParams, ReviewRecord, ReviewSortKey, SortOrder};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reviews with their aggregated comment counts.
    ///
    /// Builds the listing query: reviews LEFT JOIN comments, grouped by the
    /// review primary key with a COUNT aggregate, optionally filtered to an
    /// exact category match, ordered by the already-validated sort key and
    /// direction. Callers are expected to have parsed `sort_by`/`order`
    /// through the typed enums beforehand.
    pub async fn get_all(
        &self,
        category: Option<&str>,
        sort_by: ReviewSortKey,
        order: SortOrder,
    ) -> Result<Vec<ReviewRecord>, DbErr> {
        let mut query = entity::prelude::Review::find()
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .left_join(entity::prelude::Comment)
            .group_by(entity::review::Column::ReviewId);

        if let Some(slug) = category {
            query = query.filter(entity::review::Column::Category.eq(slug));
        }

        let order = match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let query = match sort_by {
            ReviewSortKey::Owner => query.order_by(entity::review::Column::Owner, order),
            ReviewSortKey::Title => query.order_by(entity::review::Column::Title, order),
            ReviewSortKey::ReviewId => query.order_by(entity::review::Column::ReviewId, order),
            ReviewSortKey::Category => query.order_by(entity::review::Column::Category, order),
            ReviewSortKey::CreatedAt => query.order_by(entity::review::Column::CreatedAt, order),
            ReviewSortKey::Votes => query.order_by(entity::review::Column::Votes, order),
            ReviewSortKey::Designer => query.order_by(entity::review::Column::Designer, order),
            // The aggregate is not a table column; order by its select alias
            ReviewSortKey::CommentCount => {
                query.order_by(Expr::col(Alias::new("comment_count")), order)
            }
        };

        query.into_model::<ReviewRecord>().all(self.db).await
    }

    /// Gets a review by id with its aggregated comment count
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ReviewRecord>, DbErr> {
        entity::prelude::Review::find_by_id(id)
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .left_join(entity::prelude::Comment)
            .group_by(entity::review::Column::ReviewId)
            .into_model::<ReviewRecord>()
            .one(self.db)
            .await
    }

    /// Creates a new review with zero votes and a server-assigned timestamp
    pub async fn create(
        &self,
        params: CreateReviewParams,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(params.title),
            designer: ActiveValue::Set(params.designer),
            owner: ActiveValue::Set(params.owner),
            review_img_url: ActiveValue::Set(params.review_img_url),
            review_body: ActiveValue::Set(params.review_body),
            category: ActiveValue::Set(params.category),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adjusts a review's vote count by the given amount.
    ///
    /// Applies a single atomic `votes = votes + n` column expression so
    /// concurrent adjustments cannot lose updates.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No review with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_votes(&self, id: i32, inc_votes: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::update_many()
            .col_expr(
                entity::review::Column::Votes,
                Expr::col(entity::review::Column::Votes).add(inc_votes),
            )
            .filter(entity::review::Column::ReviewId.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
