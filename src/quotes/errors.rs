//! # Quote Errors
//!
//! Error types shared by the store, query and mutation layers.

use thiserror::Error;

use super::model::QuoteId;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Quote errors
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Missing or wrong api key on a mutating request
    #[error("Invalid api key")]
    Unauthorized,

    /// No quote with the given id
    #[error("Quote {0} not found")]
    NotFound(QuoteId),

    /// No quote by the given (normalized) author
    #[error("No quotes by author '{0}'")]
    AuthorNotFound(String),

    /// Random selection on an empty collection
    #[error("The quote collection is empty")]
    EmptyCollection,

    /// Input rejected before it reached storage
    #[error("{0}")]
    Validation(String),

    /// Storage backend failure
    #[error("{0}")]
    Storage(#[from] sqlx::Error),
}

impl QuoteError {
    /// Errors the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QuoteError::Validation(_) | QuoteError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(QuoteError::Unauthorized.is_client_error());
        assert!(QuoteError::NotFound(QuoteId::new(3)).is_client_error());
        assert!(QuoteError::EmptyCollection.is_client_error());
        assert!(!QuoteError::Validation("quote is required".to_string()).is_client_error());
        assert!(!QuoteError::Storage(sqlx::Error::RowNotFound).is_client_error());
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = QuoteError::Validation("author is required".to_string());
        assert_eq!(err.to_string(), "author is required");
    }
}
