use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, PatchVotesDto},
        comment::{
            CommentDto, CommentResponseDto, CommentsResponseDto, CreateCommentDto,
            CreateCommentParams,
        },
    },
    service::comment::CommentService,
    state::AppState,
    util::parse::parse_id_from_path,
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments on a review.
///
/// Returns the review's comments, newest first. An empty comment set is
/// reported as a missing review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Numeric review id
///
/// # Returns
/// - `200 OK` - Array of comments
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - Unknown review id or empty comment set
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Numeric review id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsResponseDto),
        (status = 400, description = "Non-numeric review id", body = ErrorDto),
        (status = 404, description = "Review not found or has no comments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments_by_review_id(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id_from_path(&review_id)?;

    let service = CommentService::new(&state.db);

    let comments = service.list_for_review(review_id).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsResponseDto {
            comments: comments.into_iter().map(CommentDto::from_entity).collect(),
        }),
    ))
}

/// Post a comment on a review.
///
/// Creates a comment authored by an existing user on an existing review.
/// Votes start at zero and the timestamp is server-assigned. Extra body
/// fields are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Numeric review id
/// - `payload` - Comment data (`username`, `body`)
///
/// # Returns
/// - `201 Created` - Successfully created comment
/// - `400 Bad Request` - Non-numeric id or missing field
/// - `404 Not Found` - Unknown review or username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Numeric review id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentResponseDto),
        (status = 400, description = "Missing field or non-numeric id", body = ErrorDto),
        (status = 404, description = "Unknown review or username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id_from_path(&review_id)?;
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Bad request".to_string()))?;

    let service = CommentService::new(&state.db);

    // Convert DTO to operation parameters
    let params = CreateCommentParams::from_dto(review_id, payload);

    let comment = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            comment: CommentDto::from_entity(comment),
        }),
    ))
}

/// Adjust a comment's votes.
///
/// Applies `inc_votes` additively to the stored vote count and returns the
/// updated comment. Negative values decrease the count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Numeric comment id
/// - `payload` - Vote adjustment (`inc_votes`, required integer)
///
/// # Returns
/// - `200 OK` - The updated comment
/// - `400 Bad Request` - Non-numeric id, missing body, or non-numeric `inc_votes`
/// - `404 Not Found` - No comment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Numeric comment id")
    ),
    request_body = PatchVotesDto,
    responses(
        (status = 200, description = "Successfully adjusted votes", body = CommentResponseDto),
        (status = 400, description = "Invalid id or vote adjustment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    payload: Result<Json<PatchVotesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id_from_path(&comment_id)?;
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Bad request".to_string()))?;

    let service = CommentService::new(&state.db);

    let comment = service.adjust_votes(comment_id, payload.inc_votes).await?;

    Ok((
        StatusCode::OK,
        Json(CommentResponseDto {
            comment: CommentDto::from_entity(comment),
        }),
    ))
}

/// Delete a comment.
///
/// Removes the comment with the given id. Deleting an id that does not exist
/// still reports success.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Numeric comment id
///
/// # Returns
/// - `204 No Content` - Comment deleted (or was already absent)
/// - `400 Bad Request` - Non-numeric id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Numeric comment id")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 400, description = "Non-numeric comment id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id_from_path(&comment_id)?;

    let service = CommentService::new(&state.db);

    service.delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
