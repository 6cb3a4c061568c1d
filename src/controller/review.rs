use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, PatchVotesDto},
        review::{
            CreateReviewDto, CreateReviewParams, ListReviewsParams, ReviewQueryDto,
            ReviewResponseDto, ReviewsResponseDto,
        },
    },
    service::review::ReviewService,
    state::AppState,
    util::parse::parse_id_from_path,
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Get all reviews.
///
/// Returns reviews with their aggregated comment counts, optionally filtered
/// by category and sorted by any allowed column in either direction.
/// Defaults to `created_at` descending.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `category`, `sort_by`, and `order` query parameters
///
/// # Returns
/// - `200 OK` - Array of reviews (empty for a known category with no reviews)
/// - `400 Bad Request` - `sort_by` or `order` outside the allowed sets
/// - `404 Not Found` - Unknown category filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(
        ("category" = Option<String>, Query, description = "Filter reviews by category slug"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by (default: created_at)"),
        ("order" = Option<String>, Query, description = "ASC or DESC (default: DESC)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = ReviewsResponseDto),
        (status = 400, description = "Invalid sort or order query", body = ErrorDto),
        (status = 404, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    // Convert DTO to operation parameters
    let params = ListReviewsParams::from_dto(query);

    let reviews = service.list(params).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewsResponseDto {
            reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Create a new review.
///
/// Creates a review owned by an existing user in an existing category. The
/// designer field is optional; votes start at zero and the timestamp is
/// server-assigned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Review creation data
///
/// # Returns
/// - `201 Created` - Successfully created review with a comment count of zero
/// - `400 Bad Request` - Missing required field or empty category
/// - `404 Not Found` - Unknown owner or category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewResponseDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 404, description = "Unknown owner or category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Bad request".to_string()))?;

    let service = ReviewService::new(&state.db);

    // Convert DTO to operation parameters
    let params = CreateReviewParams::from_dto(payload);

    let review = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}

/// Get a review by id.
///
/// Returns a single review with its aggregated comment count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Numeric review id
///
/// # Returns
/// - `200 OK` - The review
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Numeric review id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewResponseDto),
        (status = 400, description = "Non-numeric review id", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id_from_path(&review_id)?;

    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(review_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}

/// Adjust a review's votes.
///
/// Applies `inc_votes` additively to the stored vote count and returns the
/// updated review. Negative values decrease the count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Numeric review id
/// - `payload` - Vote adjustment (`inc_votes`, required integer)
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - Non-numeric id, missing body, or non-numeric `inc_votes`
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Numeric review id")
    ),
    request_body = PatchVotesDto,
    responses(
        (status = 200, description = "Successfully adjusted votes", body = ReviewResponseDto),
        (status = 400, description = "Invalid id or vote adjustment", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_review_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<PatchVotesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id_from_path(&review_id)?;
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Bad request".to_string()))?;

    let service = ReviewService::new(&state.db);

    let review = service.adjust_votes(review_id, payload.inc_votes).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewResponseDto {
            review: review.into_dto(),
        }),
    ))
}
