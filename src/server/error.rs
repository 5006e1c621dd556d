use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type ApiResponse<T> = Result<T, ApiError>;

/// Errors a handler can fail with. Missing entities and empty result sets
/// both map to `NotFound`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest,
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Not able to process request")]
    UnprocessableEntity,
    #[error("Internal Server Error")]
    Internal(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            tracing::error!("Store failure: {source}");
        }
        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes() {
        let cases = [
            (ApiError::BadRequest, 400, "Bad Request"),
            (ApiError::NotFound, 404, "Not Found"),
            (ApiError::MethodNotAllowed, 405, "Method Not Allowed"),
            (
                ApiError::UnprocessableEntity,
                422,
                "Not able to process request",
            ),
            (
                ApiError::Internal(sqlx::Error::PoolClosed),
                500,
                "Internal Server Error",
            ),
        ];
        for (err, code, message) in cases {
            assert_eq!(err.status_code().as_u16(), code);
            let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
            assert_eq!(
                body,
                serde_json::json!({"success": false, "error": code, "message": message})
            );
        }
    }

    #[test]
    fn internal_error_hides_source() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
