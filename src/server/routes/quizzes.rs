use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    quiz::QuizRng,
    server::{
        app::AppState,
        error::{ApiError, ApiResponse},
    },
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::json_body;

/// Category id 0 means "all categories".
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Question,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    State(rng): State<QuizRng>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<Json<QuizQuestion>> {
    let request = json_body(body)?;
    let category = request.quiz_category.ok_or(ApiError::NotFound)?;
    let previous = request.previous_questions.ok_or(ApiError::BadRequest)?;

    let candidates = if category.id == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, category.id).await?
    };
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    let Some(question) = rng.pick(remaining) else {
        tracing::debug!(category = category.id, "No quiz questions left");
        return Err(ApiError::NotFound);
    };
    QUIZ_QUESTIONS_SERVED
        .with_label_values(&[category.id.to_string().as_str()])
        .inc();

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
