//! # Parse errors
//!
//! Every failure aborts the whole parse: there is no partial result, and the
//! output passed to [`parse_into`](crate::parse_into) must not be trusted once
//! an error has been returned.
//!
//! With the `axum` feature enabled, [`ParseError`] is also an axum rejection
//! that renders as `400 Bad Request`:
//!
//! ```rust,ignore
//! use querystring_filter::{FilterSpec, QueryFilter};
//!
//! async fn list(QueryFilter(filter): QueryFilter<FilterSpec>) -> String {
//!     format!("{} where clauses", filter.where_clause.len())
//! }
//! ```

use std::fmt;

/// Error returned when a query string cannot be turned into a filter.
#[derive(Debug)]
pub enum ParseError {
    /// The input is not valid percent-encoded text.
    Decode {
        /// Human readable reason, e.g. the offending escape.
        reason: String,
    },

    /// The decoded text does not yield a usable query component.
    MalformedQuery {
        /// Human readable reason.
        reason: String,
    },

    /// A numeric reserved key (`limit`, `skip`, `page`, `pageSize`) carried
    /// a value that is not a base-10 integer.
    InvalidNumber {
        /// The reserved key.
        key: String,
        /// The raw value as it appeared in the query.
        value: String,
        /// Underlying integer parse failure.
        source: std::num::ParseIntError,
    },

    /// The parsed filter could not be projected onto the caller's shape.
    Projection {
        /// Underlying serde failure.
        source: serde_json::Error,
    },
}

impl ParseError {
    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedQuery {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_number(
        key: impl Into<String>,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
            source,
        }
    }

    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode",
            Self::MalformedQuery { .. } => "malformed_query",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::Projection { .. } => "projection",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { reason } => write!(f, "invalid percent-encoding: {reason}"),
            Self::MalformedQuery { reason } => write!(f, "invalid querystring: {reason}"),
            Self::InvalidNumber { key, value, .. } => {
                write!(f, "'{key}' must be an integer, got '{value}'")
            }
            Self::Projection { source } => write!(f, "cannot project filter: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            Self::Projection { source } => Some(source),
            Self::Decode { .. } | Self::MalformedQuery { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self::Projection { source }
    }
}

#[cfg(feature = "axum")]
mod response {
    use super::ParseError;
    use axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use serde::Serialize;

    /// Error body sent to clients.
    #[derive(Serialize)]
    struct ErrorResponse {
        error: String,
    }

    impl ParseError {
        /// HTTP status this error maps to.
        #[must_use]
        pub fn status_code(&self) -> StatusCode {
            match self {
                // The caller's output shape is a server-side concern.
                Self::Projection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            }
        }

        fn user_message(&self) -> String {
            match self {
                Self::Projection { .. } => "Failed to process query".to_string(),
                _ => self.to_string(),
            }
        }
    }

    impl IntoResponse for ParseError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if status.is_server_error() {
                tracing::error!(error = %self, kind = self.kind(), "Query projection failed");
            } else {
                tracing::debug!(error = %self, kind = self.kind(), "Rejected querystring");
            }

            let body = ErrorResponse {
                error: self.user_message(),
            };
            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_error(raw: &str) -> std::num::ParseIntError {
        raw.parse::<i64>().unwrap_err()
    }

    #[test]
    fn test_invalid_number_display() {
        let err = ParseError::invalid_number("limit", "x", int_error("x"));
        assert_eq!(err.to_string(), "'limit' must be an integer, got 'x'");
        assert_eq!(err.kind(), "invalid_number");
    }

    #[test]
    fn test_decode_display() {
        let err = ParseError::decode("invalid URL escape \"%zz\"");
        assert_eq!(
            err.to_string(),
            "invalid percent-encoding: invalid URL escape \"%zz\""
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = ParseError::malformed("empty query");
        assert_eq!(err.to_string(), "invalid querystring: empty query");
        assert_eq!(err.kind(), "malformed_query");
    }

    #[test]
    fn test_error_sources() {
        use std::error::Error;

        let err = ParseError::invalid_number("page", "", int_error(""));
        assert!(err.source().is_some());
        assert!(ParseError::malformed("x").source().is_none());
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<i64>("\"nope\"").unwrap_err();
        let err: ParseError = serde_err.into();
        assert_eq!(err.kind(), "projection");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_status_codes() {
        use axum::http::StatusCode;

        assert_eq!(
            ParseError::decode("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ParseError::invalid_number("skip", "a", int_error("a")).status_code(),
            StatusCode::BAD_REQUEST
        );
        let serde_err = serde_json::from_str::<i64>("[]").unwrap_err();
        assert_eq!(
            ParseError::from(serde_err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
