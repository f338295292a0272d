use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;
}

#[derive(ToSchema, Serialize)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// A message along with the affected record
#[derive(Serialize)]
pub struct MessageWithResult<T> {
    message: String,
    result: T,
}

impl<T> MessageWithResult<T>
where
    T: Serialize,
{
    pub fn new(message: impl Display, result: T) -> Self {
        Self {
            message: message.to_string(),
            result,
        }
    }
}

impl<T> IntoResponse for MessageWithResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(ToSchema, Serialize)]
pub struct Error {
    error: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl Error {
    pub fn new(status_code: StatusCode, error: impl Display) -> Self {
        Self {
            error: error.to_string(),
            status_code,
        }
    }

    pub fn from_api_error<T>(err: &T) -> Self
    where
        T: AsStatusCode + Display,
    {
        Self::new(err.as_status_code(), err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}
