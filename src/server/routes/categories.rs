use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{categories_map, get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiResponse},
    },
};

use super::path_id;

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = categories_map(&get_all_categories(&pool).await?);
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let category_id = path_id(path)?;
    let category = get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = get_questions_for_category(&pool, category.id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestionsBody {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
