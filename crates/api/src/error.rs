use actix_web::{http::StatusCode, HttpResponse};
use kennel_api_structs::Response;
use kennel_domain::DeletionError;
use thiserror::Error;

/// Errors returned by the controllers. The message is rendered as the
/// `message` of a failed `Response`.
#[derive(Error, Debug)]
pub enum KennelError {
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    BadClientData(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for KennelError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Response::<()>::failure(self.to_string()))
    }
}

impl From<DeletionError> for KennelError {
    fn from(e: DeletionError) -> Self {
        let message = e.to_string();
        match e {
            DeletionError::NotFound { .. } => Self::NotFound(message),
            DeletionError::Referenced { .. } => Self::Conflict(message),
            DeletionError::Store { .. } => Self::InternalError(message),
        }
    }
}
