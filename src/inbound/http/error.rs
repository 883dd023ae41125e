//! HTTP error payloads and mapping from domain errors.
//!
//! Keeps the domain free of transport concerns by translating [`Error`]
//! values into plain-text Actix responses here. Internal failures are
//! logged with their cause and redacted in the response body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::StatisticsRepositoryError;
use crate::domain::{Error, ErrorCode, ValidationReport};

const INTERNAL_MESSAGE: &str = "internal server error";

/// Plain-text error returned by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message rendered into the response body.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self {
            code: value.code(),
            message: value.message().to_owned(),
        }
    }
}

impl From<ValidationReport> for ApiError {
    fn from(report: ValidationReport) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: report.to_string(),
        }
    }
}

impl From<StatisticsRepositoryError> for ApiError {
    fn from(err: StatisticsRepositoryError) -> Self {
        // Request-scoped surfacing only: the store failure must never take
        // the process down or leak its cause to the caller.
        error!(error = %err, "statistics repository failure");
        Self {
            code: ErrorCode::InternalError,
            message: INTERNAL_MESSAGE.to_owned(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let message = if matches!(self.code, ErrorCode::InternalError) {
            INTERNAL_MESSAGE
        } else {
            self.message.as_str()
        };
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("{message}\n"))
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn domain_codes_map_to_matching_statuses() {
        let invalid = ApiError::from(Error::invalid_request("bad"));
        let missing = ApiError::from(Error::not_found("gone"));
        let internal = ApiError::from(Error::internal("boom"));

        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn body_is_the_message_with_a_trailing_newline() {
        let err = ApiError::from(Error::not_found("there isn't any saved request yet"));
        let response = err.error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        assert_eq!(body.as_ref(), b"there isn't any saved request yet\n");
    }

    #[actix_web::test]
    async fn repository_failures_are_redacted() {
        let err = ApiError::from(StatisticsRepositoryError::query("relation does not exist"));
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.expect("body bytes");
        assert_eq!(body.as_ref(), b"internal server error\n");
    }
}
