use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("{0}")]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    MiniJinja(#[from] minijinja::Error),

    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> axum::response::Response {
        match self {
            GalleryError::MiniJinja(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            GalleryError::IO(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            GalleryError::Http(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            GalleryError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            GalleryError::NotFound(e) => (StatusCode::NOT_FOUND, e).into_response(),
        }
    }
}
