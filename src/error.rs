use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{corpus::CorpusError, services::text_index::IndexError};

/// Application-level errors
///
/// Missing sites and cold user profiles are deliberately absent here: those
/// resolve to empty recommendation lists, not errors. What remains is the
/// corpus/engine construction path, which only fails on reload or startup.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Engine error: {0}")]
    Engine(#[from] IndexError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Corpus(CorpusError::Io { .. }) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Corpus(_) | AppError::Engine(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
