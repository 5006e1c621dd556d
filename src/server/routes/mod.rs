mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use super::error::{ApiError, ApiResponse};

// ids in the path are integers; anything else is an unknown route
fn path_id(path: Result<Path<i64>, PathRejection>) -> ApiResponse<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected path: {rejection}");
        ApiError::NotFound
    })
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResponse<T> {
    body.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!("Rejected body: {rejection}");
        ApiError::BadRequest
    })
}
