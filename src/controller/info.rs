use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Tag for grouping the API directory endpoint in OpenAPI documentation
pub static INFO_TAG: &str = "info";

/// Get the endpoint directory.
///
/// Returns a static JSON document describing every endpoint the API serves,
/// including accepted query parameters and request body shapes.
///
/// # Returns
/// - `200 OK` - Endpoint directory
#[utoipa::path(
    get,
    path = "/api",
    tag = INFO_TAG,
    responses(
        (status = 200, description = "Directory of all available endpoints")
    ),
)]
pub async fn get_api_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "GET /api": {
                "description": "a json representation of all the available endpoints of the api"
            },
            "GET /api/categories": {
                "description": "serves an array of all categories"
            },
            "POST /api/categories": {
                "description": "adds a new category",
                "exampleRequest": { "slug": "dexterity", "description": "games involving physical skill" }
            },
            "GET /api/reviews": {
                "description": "serves an array of all reviews",
                "queries": ["category", "sort_by", "order"]
            },
            "POST /api/reviews": {
                "description": "adds a new review",
                "exampleRequest": {
                    "title": "Jenga",
                    "designer": "Leslie Scott",
                    "owner": "mallionaire",
                    "review_img_url": "https://images.example.com/jenga.png",
                    "review_body": "Fiddly fun for all the family",
                    "category": "dexterity"
                }
            },
            "GET /api/reviews/{review_id}": {
                "description": "serves a single review with its comment count"
            },
            "PATCH /api/reviews/{review_id}": {
                "description": "adjusts a review's votes",
                "exampleRequest": { "inc_votes": 1 }
            },
            "GET /api/reviews/{review_id}/comments": {
                "description": "serves an array of comments on the given review, newest first"
            },
            "POST /api/reviews/{review_id}/comments": {
                "description": "adds a comment to the given review",
                "exampleRequest": { "username": "dav3rid", "body": "Test Comment" }
            },
            "GET /api/users": {
                "description": "serves an array of all users"
            },
            "GET /api/users/{username}": {
                "description": "serves a single user"
            },
            "PATCH /api/comments/{comment_id}": {
                "description": "adjusts a comment's votes",
                "exampleRequest": { "inc_votes": -1 }
            },
            "DELETE /api/comments/{comment_id}": {
                "description": "deletes the given comment"
            }
        })),
    )
}
