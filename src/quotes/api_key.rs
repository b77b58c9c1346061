//! # Api Key
//!
//! The shared secret that authorizes mutating requests.

use std::fmt;

use subtle::ConstantTimeEq;

use super::errors::{QuoteError, QuoteResult};

/// Shared secret compared by equality against the `api-key` parameter
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Exact, constant-time match. A missing key never matches.
    pub fn matches(&self, supplied: Option<&str>) -> bool {
        match supplied {
            Some(s) => self.0.as_bytes().ct_eq(s.as_bytes()).into(),
            None => false,
        }
    }

    /// `Unauthorized` unless `supplied` matches
    pub fn authorize(&self, supplied: Option<&str>) -> QuoteResult<()> {
        if self.matches(supplied) {
            Ok(())
        } else {
            Err(QuoteError::Unauthorized)
        }
    }
}

// Keep the secret out of logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
