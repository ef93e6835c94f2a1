use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid request format")]
    InvalidFormat,

    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HandlerError::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerError::InvalidFormat => StatusCode::BAD_REQUEST,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            HandlerError::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                self.to_string(),
            )
                .into_response(),
            HandlerError::Internal(ref err) => {
                log::error!("Request failed: {:#}", err);
                (
                    status,
                    Json(ErrorBody {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}
