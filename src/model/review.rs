//! Review domain models, parameters, and sort allow-lists.
//!
//! The listing endpoint accepts dynamic sort/order query parameters. Both are
//! parsed into closed enums before any query is built, so no unchecked
//! identifier ever reaches SQL construction.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A review row joined with its aggregated comment count.
///
/// Produced by the listing and lookup queries, which LEFT JOIN comments and
/// GROUP BY the review primary key. `comment_count` is derived, never stored.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ReviewRecord {
    pub review_id: i32,
    pub title: String,
    pub designer: Option<String>,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

impl ReviewRecord {
    /// Builds a record for a freshly inserted review, which has no comments yet.
    pub fn from_new_entity(entity: entity::review::Model) -> Self {
        Self {
            review_id: entity.review_id,
            title: entity.title,
            designer: entity.designer,
            owner: entity.owner,
            review_img_url: entity.review_img_url,
            review_body: entity.review_body,
            category: entity.category,
            votes: entity.votes,
            created_at: entity.created_at,
            comment_count: 0,
        }
    }

    /// Converts the domain record to its API representation.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            title: self.title,
            designer: self.designer,
            owner: self.owner,
            review_img_url: self.review_img_url,
            review_body: self.review_body,
            category: self.category,
            votes: self.votes,
            created_at: self.created_at,
            comment_count: self.comment_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub review_id: i32,
    pub title: String,
    pub designer: Option<String>,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewsResponseDto {
    pub reviews: Vec<ReviewDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub review: ReviewDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub title: String,
    pub designer: Option<String>,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
}

/// Parameters for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub title: String,
    pub designer: Option<String>,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
}

impl CreateReviewParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(dto: CreateReviewDto) -> Self {
        Self {
            title: dto.title,
            designer: dto.designer,
            owner: dto.owner,
            review_img_url: dto.review_img_url,
            review_body: dto.review_body,
            category: dto.category,
        }
    }
}

/// Query parameters accepted by the review listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewQueryDto {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Parameters for listing reviews.
#[derive(Debug, Clone, Default)]
pub struct ListReviewsParams {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ListReviewsParams {
    /// Converts the query DTO to operation parameters.
    pub fn from_dto(dto: ReviewQueryDto) -> Self {
        Self {
            category: dto.category,
            sort_by: dto.sort_by,
            order: dto.order,
        }
    }
}

/// Columns a review listing may be sorted by.
///
/// This is the full set of accepted `sort_by` values; any other value is
/// rejected before a query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortKey {
    Owner,
    Title,
    ReviewId,
    Category,
    CreatedAt,
    Votes,
    Designer,
    CommentCount,
}

impl ReviewSortKey {
    /// Parses a `sort_by` query parameter against the allowed column set.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "title" => Some(Self::Title),
            "review_id" => Some(Self::ReviewId),
            "category" => Some(Self::Category),
            "created_at" => Some(Self::CreatedAt),
            "votes" => Some(Self::Votes),
            "designer" => Some(Self::Designer),
            "comment_count" => Some(Self::CommentCount),
            _ => None,
        }
    }
}

/// Sort direction for the review listing. Parameters are matched
/// case-sensitively: only `ASC` and `DESC` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses an `order` query parameter.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}
