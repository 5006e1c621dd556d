use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{categories_map, get_all_categories},
            questions::{self, get_all_questions, get_question, search_questions},
        },
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::Page,
        error::{ApiError, ApiResponse},
        pagination::paginate,
    },
};

use super::{json_body, path_id};

// Every field is optional so a missing one becomes a 400 from the handler.
// `difficulty` and `category` take numbers or numeric strings; anything else
// fails body parsing, which is also a 400.
#[derive(Deserialize)]
struct NewQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
}

impl NewQuestionBody {
    fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            difficulty: self.difficulty?,
            category: self.category?,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    // length of this page, not of the whole table
    total_questions: usize,
    current_category: Option<String>,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Page(page): Page,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = paginate(page, get_all_questions(&pool).await?);
    let categories = categories_map(&get_all_categories(&pool).await?);

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionsPage {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
        categories,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<Deleted>> {
    let id = path_id(path)?;
    let question = get_question(&pool, id).await?.ok_or(ApiError::NotFound)?;

    questions::delete_question(&pool, question.id).await?;
    tracing::info!(id = question.id, "Question deleted");
    Ok(Json(Deleted {
        success: true,
        deleted: question.id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<Created>> {
    let new_question = json_body(body)?
        .into_new_question()
        .ok_or(ApiError::BadRequest)?;

    let id = questions::create_question(&pool, &new_question).await?;
    tracing::info!(id, category = new_question.category, "Question created");
    Ok(Json(Created { success: true }))
}

async fn search(
    State(pool): State<SqlitePool>,
    Page(page): Page,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<Json<SearchResults>> {
    let term = json_body(body)?.search_term.unwrap_or_default();
    let questions = paginate(page, search_questions(&pool, &term).await?);
    tracing::debug!(term = %term, found = questions.len(), "Search");

    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search))
        .with_state(state)
}
