use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::{DirectoryError, ErrorKind};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Directory(#[from] DirectoryError),

    #[error("{0}")]
    BadRequest(#[from] QueryRejection),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ServerError::Directory(e) => {
                let status = match e.kind() {
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                };
                warn!(activity = e.activity(), status = status.as_u16(), "{}", e);
                (status, e.to_string())
            }
            ServerError::BadRequest(e) => {
                warn!(status = e.status().as_u16(), "{}", e);
                (StatusCode::BAD_REQUEST, e.body_text())
            }
            ServerError::Io(e) => {
                error!(%e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected Error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}
