//! Business logic layer between controllers and repositories.
//!
//! Services validate operation parameters (sort/order allow-lists, required
//! non-empty fields), decide the not-found outcomes the repositories cannot
//! (unknown category filter vs. empty-but-known category), and convert missing
//! rows into the application's error taxonomy.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
