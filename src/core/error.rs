//! Typed error handling for the search layer
//!
//! The search layer distinguishes exactly two failure classes: the
//! caller handed over a malformed page request, or the storage
//! collaborator failed. Everything else (an all-unset condition, an
//! inverted score range) is valid input and flows through as data.
//!
//! Storage backends report failures as `anyhow::Error`; the repository
//! wraps them into [`SearchError::Storage`] without retrying. Retry
//! policy, if any, belongs to the backend.

use std::fmt;

/// The error type for search and pagination operations
#[derive(Debug)]
pub enum SearchError {
    /// The page request was malformed (negative offset or non-positive
    /// limit). Bounds are rejected, never clamped.
    InvalidPageRequest {
        /// Offset as the caller supplied it
        offset: i64,
        /// Limit as the caller supplied it
        limit: i64,
    },

    /// The storage collaborator failed during a content or count query
    Storage {
        /// The backend's own error
        source: anyhow::Error,
    },
}

impl SearchError {
    /// Wrap a storage backend failure
    pub fn storage(source: anyhow::Error) -> Self {
        SearchError::Storage { source }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::InvalidPageRequest { .. } => "INVALID_PAGE_REQUEST",
            SearchError::Storage { .. } => "STORAGE_UNAVAILABLE",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPageRequest { offset, limit } => {
                write!(
                    f,
                    "page request must have a non-negative offset and a positive limit (got offset {}, limit {})",
                    offset, limit
                )
            }
            SearchError::Storage { source } => {
                write!(f, "storage backend unavailable: {}", source)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidPageRequest { .. } => None,
            SearchError::Storage { source } => Some(source.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_page_request() {
        let err = SearchError::InvalidPageRequest {
            offset: -1,
            limit: 0,
        };
        assert_eq!(err.error_code(), "INVALID_PAGE_REQUEST");
        assert!(err.to_string().contains("offset -1"));
        assert!(err.to_string().contains("limit 0"));
    }

    #[test]
    fn test_storage_error_keeps_source() {
        let err = SearchError::storage(anyhow::anyhow!("connection refused"));
        assert_eq!(err.error_code(), "STORAGE_UNAVAILABLE");
        assert!(err.to_string().contains("connection refused"));

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
