use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::pages;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please provide a '{0}' parameter.")]
    MissingParam(&'static str),

    #[error("Invalid story name.")]
    InvalidName,

    #[error("{0} not found.")]
    NotFound(String),

    #[error("No stories match.")]
    NoCandidates,

    #[error("You are not an admin.")]
    NotAdmin,

    #[error("Story is too large.")]
    StoryTooLarge,

    #[error("Storage failure: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingParam { .. } | AppError::InvalidName => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::NoCandidates => StatusCode::NOT_FOUND,
            AppError::NotAdmin => StatusCode::FORBIDDEN,
            AppError::StoryTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let AppError::Storage(err) = &self {
            error!("Storage failure: {err}");
        }

        (status, Html(pages::base_page("Error", &self.to_string()))).into_response()
    }
}
