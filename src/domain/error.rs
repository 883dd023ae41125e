//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! to status codes and plain-text bodies.

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload surfaced to adapters.
///
/// The message is the human-readable text callers see verbatim; keep it
/// free of internal detail for the [`ErrorCode::InternalError`] category,
/// which adapters redact anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_matching_codes() {
        assert_eq!(Error::invalid_request("bad").code(), ErrorCode::InvalidRequest);
        assert_eq!(Error::not_found("gone").code(), ErrorCode::NotFound);
        assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
    }

    #[test]
    fn display_is_the_message() {
        let err = Error::not_found("there isn't any saved request yet");
        assert_eq!(err.to_string(), "there isn't any saved request yet");
        assert_eq!(err.message(), "there isn't any saved request yet");
    }
}
