//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use registrar_domain::error::RegistrarError;

use crate::envelope::Failure;

/// Envelope message for refused callers.
pub const UNAUTHORIZED: &str = "Unauthorized";
/// Envelope message for failures reported without detail.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// An error envelope paired with its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Failure,
}

impl ApiError {
    /// 500 that exposes the underlying failure text under `error`.
    pub fn detailed(message: &'static str, err: &RegistrarError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Failure::new(message).with_error(detail(err)),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: Failure::new(UNAUTHORIZED),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Failure::new(INTERNAL_SERVER_ERROR),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Default mapping: refused callers get 401, anything else an opaque 500.
impl From<RegistrarError> for ApiError {
    fn from(err: RegistrarError) -> Self {
        match err {
            RegistrarError::Unauthorized(_) => Self::unauthorized(),
            RegistrarError::Validation(_) | RegistrarError::Storage(_) => {
                tracing::error!(error = %err, "request failed");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.body.into_response_with(self.status)
    }
}

/// Message text of the failure that caused `err`.
fn detail(err: &RegistrarError) -> String {
    match err {
        RegistrarError::Storage(source) => source.to_string(),
        other => other.to_string(),
    }
}
