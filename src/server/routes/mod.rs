mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::db::Category;

use super::deserializers::{default_page, deserialize_page};
use super::error::ApiError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<T, ApiError>;

/// `current_category` reported when no category filter applies.
const NO_CATEGORY: i64 = 0;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    page: i64,
}

/// id -> label, serialized as a JSON object keyed by id.
fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
