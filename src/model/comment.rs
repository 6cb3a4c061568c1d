use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub body: String,
    pub votes: i32,
    pub author: String,
    pub review_id: i32,
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Converts the entity model to its API representation.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            body: entity.body,
            votes: entity.votes,
            author: entity.author,
            review_id: entity.review_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponseDto {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub comment: CommentDto,
}

/// Request body for posting a comment. Unknown extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub username: String,
    pub body: String,
}

/// Parameters for creating a comment, combining the path id with the body.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub review_id: i32,
    pub author: String,
    pub body: String,
}

impl CreateCommentParams {
    /// Converts the request DTO and path id to operation parameters.
    pub fn from_dto(review_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            review_id,
            author: dto.username,
            body: dto.body,
        }
    }
}
