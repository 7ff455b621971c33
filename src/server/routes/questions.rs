use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_all_categories,
            questions::{self, count_questions, get_all_questions, get_question_by_id},
        },
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, OrNotFound},
        extractors::{ApiJson, ApiPath, ApiQuery},
        pagination::paginate,
    },
};

use super::{category_map, ApiResponse, PageQuery, NO_CATEGORY};

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: i64,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    search_count: usize,
    current_category: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let all_questions = get_all_questions(&pool).await.or_not_found()?;
    let total_questions = all_questions.len();
    let questions = paginate(all_questions, query.page);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await.or_not_found()?;
    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
        current_category: NO_CATEGORY,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Json<Deleted>> {
    let question = get_question_by_id(&pool, id).await?.or_not_found()?;
    questions::delete_question(&pool, question.id).await?;
    tracing::info!(id, "Deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(new_question): ApiJson<NewQuestion>,
) -> ApiResponse<Json<Created>> {
    if new_question.question.trim().is_empty() || new_question.answer.trim().is_empty() {
        return Err(ApiError::BadRequest);
    }
    let id = questions::create_question(
        &pool,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await?;
    tracing::info!(id, category = new_question.category, "Created question");
    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let questions = questions::search_questions(&pool, &body.search_term).await?;
    let total_questions = count_questions(&pool).await?;
    Ok(Json(SearchResults {
        success: true,
        search_count: questions.len(),
        questions,
        total_questions,
        current_category: NO_CATEGORY,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}
