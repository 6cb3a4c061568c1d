use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        category::{
            CategoriesResponseDto, CategoryDto, CategoryResponseDto, CreateCategoryDto,
            CreateCategoryParams,
        },
    },
    service::category::CategoryService,
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// Returns every category with its slug and description.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = CategoriesResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CategoriesResponseDto {
            categories: categories
                .into_iter()
                .map(CategoryDto::from_entity)
                .collect(),
        }),
    ))
}

/// Create a new category.
///
/// Creates a category from the provided slug and description. The slug acts
/// as the primary key and must be non-empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category creation data (slug, description)
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Missing or empty slug, or malformed body
/// - `409 Conflict` - A category with that slug already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryResponseDto),
        (status = 400, description = "Missing or empty slug", body = ErrorDto),
        (status = 409, description = "Category already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Bad request".to_string()))?;

    let service = CategoryService::new(&state.db);

    // Convert DTO to operation parameters
    let params = CreateCategoryParams::from_dto(payload);

    let category = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponseDto {
            category: CategoryDto::from_entity(category),
        }),
    ))
}
