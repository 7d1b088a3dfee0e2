use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{
    error_payload::{grading_details, ErrorPayload},
    grading_error::GradingError,
};

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("An error occurred while accessing the database")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    Grading(#[from] GradingError),

    #[error("User not found")]
    UserNotFound,

    #[error("Internal server error")]
    InternalServerError(),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Grading(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError() => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Grading(_) => "GRADING_ERROR",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::InternalServerError() => "INTERNAL_SERVER_ERROR",
        }
        .to_string()
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Grading(e) => Some(grading_details(e)),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: self.details(),
        };

        (status, Json(error_response)).into_response()
    }
}
