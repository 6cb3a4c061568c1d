use crate::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod adjust_votes;
mod delete;
