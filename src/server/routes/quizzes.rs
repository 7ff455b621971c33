use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_category,
            questions::{count_questions_for_category, get_quiz_candidates},
        },
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, OrNotFound},
        extractors::ApiJson,
    },
    telemetry::Metrics,
};

use super::{ApiResponse, NO_CATEGORY};

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Question,
}

fn draw(candidates: &[Question]) -> Option<Question> {
    candidates.choose(&mut rand::thread_rng()).cloned()
}

async fn next_question(
    State(pool): State<SqlitePool>,
    State(metrics): State<Metrics>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<Json<NextQuestion>> {
    let category_id = request.quiz_category.id;
    let candidates = if category_id == NO_CATEGORY {
        get_quiz_candidates(&pool, None, &request.previous_questions).await?
    } else {
        let category = get_category(&pool, category_id).await?.or_not_found()?;
        if count_questions_for_category(&pool, category.id).await? == 0 {
            return Err(ApiError::NotFound);
        }
        get_quiz_candidates(&pool, Some(category.id), &request.previous_questions).await?
    };

    let question = draw(&candidates).or_not_found()?;
    let label = if category_id == NO_CATEGORY {
        "all".to_owned()
    } else {
        category_id.to_string()
    };
    metrics
        .quiz_questions
        .with_label_values(&[label.as_str()])
        .inc();
    tracing::debug!(
        question = question.id,
        candidates = candidates.len(),
        "Drew quiz question"
    );

    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
