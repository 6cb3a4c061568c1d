use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{category, comment, info, review, user},
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "info", description = "API endpoint directory"),
    (name = "category", description = "Board-game categories"),
    (name = "review", description = "Board-game reviews"),
    (name = "comment", description = "Comments on reviews"),
    (name = "user", description = "Community users")
))]
struct ApiDoc;

pub fn router() -> axum::Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(info::get_api_info))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(review::get_reviews, review::create_review))
        .routes(routes!(review::get_review_by_id, review::patch_review_votes))
        .routes(routes!(
            comment::get_comments_by_review_id,
            comment::create_comment
        ))
        .routes(routes!(
            comment::patch_comment_votes,
            comment::delete_comment
        ))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user_by_username))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(endpoint_not_found)
}

/// Fallback handler returned for any unmatched route
async fn endpoint_not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
