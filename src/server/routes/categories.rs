use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::{count_questions, get_questions_for_category},
        },
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, OrNotFound},
        extractors::{ApiPath, ApiQuery},
        pagination::paginate,
    },
};

use super::{category_map, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_cats: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    num_cat_questions: usize,
    total_questions: i64,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_cats = categories.len();
    Ok(Json(CategoriesBody {
        success: true,
        categories: category_map(categories),
        total_cats,
    }))
}

// an empty page is still a success here, only a missing category is an error
async fn category_questions(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let category = get_category(&pool, id).await?.or_not_found()?;
    let total_questions = count_questions(&pool).await?;
    let questions = paginate(
        get_questions_for_category(&pool, category.id).await?,
        query.page,
    );
    Ok(Json(CategoryQuestionsBody {
        success: true,
        num_cat_questions: questions.len(),
        questions,
        total_questions,
        current_category: category.id,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
