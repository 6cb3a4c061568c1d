use crate::error::AppError;

/// Parses a numeric resource id from its raw path segment.
///
/// Identifiers arrive as arbitrary path text; anything that is not an integer
/// is a client error, not a server fault.
///
/// # Arguments
/// - `value` - The raw path segment to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a number
pub fn parse_id_from_path(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Bad request".to_string()))
}
