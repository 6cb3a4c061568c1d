//! HTTP request handlers for the REST API.
//!
//! Controllers extract and validate request input, convert DTOs to operation
//! parameters, call the service layer, and shape the JSON responses. Every
//! handler is annotated with `utoipa::path` for OpenAPI documentation.

pub mod category;
pub mod comment;
pub mod info;
pub mod review;
pub mod user;
