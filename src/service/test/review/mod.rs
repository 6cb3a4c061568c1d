use crate::{
    error::AppError,
    model::review::{CreateReviewParams, ListReviewsParams},
    service::review::ReviewService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod list;
