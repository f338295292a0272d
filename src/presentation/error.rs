use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::{Display, From};

use super::api_response::{self, AsStatusCode};
use crate::application::song;

#[derive(Debug, Display, From, derive_more::Error)]
pub enum ApiError {
    /// Malformed path, query or body
    #[from(ignore)]
    BadRequest(#[error(not(source))] String),
    Song(song::Error),
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }
}

impl AsStatusCode for song::Error {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AsStatusCode for ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Song(err) => err.as_status_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.as_status_code();

        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }

        api_response::Error::from_api_error(&self).into_response()
    }
}
