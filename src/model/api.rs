use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// Request body for vote adjustment on reviews and comments.
///
/// The adjustment is additive; negative values decrease the stored count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatchVotesDto {
    pub inc_votes: i32,
}
