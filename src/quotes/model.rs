//! # Quote Model
//!
//! The `Quote` entity, validated input, and author normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{QuoteError, QuoteResult};

/// Store-assigned quote identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct QuoteId(i64);

impl QuoteId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted quotation.
///
/// Serializes as `{"quote": ..., "author": ...}`; the id stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Quote {
    #[serde(skip_serializing)]
    pub id: QuoteId,
    pub quote: String,
    pub author: String,
}

/// Validated quote text and author, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    quote: String,
    author: String,
}

impl NewQuote {
    /// Validate raw input.
    ///
    /// Both fields must be present and not blank. The author is stored in
    /// title case so that author search is an exact match.
    pub fn new(quote: Option<String>, author: Option<String>) -> QuoteResult<Self> {
        let quote = required("quote", quote)?;
        let author = required("author", author)?;

        Ok(Self {
            quote,
            author: title_case(&author),
        })
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

fn required(field: &str, value: Option<String>) -> QuoteResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(QuoteError::Validation(format!("{} is required", field))),
    }
}

/// Word-wise title casing.
///
/// A letter directly after another letter is lowercased; every other letter
/// starts a word and is uppercased. Non-letters pass through unchanged, so
/// `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("mark twain"), "Mark Twain");
        assert_eq!(title_case("MARK TWAIN"), "Mark Twain");
        assert_eq!(title_case("mArK tWaIn"), "Mark Twain");
        assert_eq!(title_case("Mark Twain"), "Mark Twain");
    }

    #[test]
    fn test_title_case_punctuation_starts_words() {
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("jean-paul sartre"), "Jean-Paul Sartre");
        assert_eq!(title_case("1st author"), "1St Author");
    }

    #[test]
    fn test_title_case_preserves_whitespace() {
        assert_eq!(title_case("  albert   einstein "), "  Albert   Einstein ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_new_quote_normalizes_author() {
        let new = NewQuote::new(Some("Hello".to_string()), Some("world".to_string())).unwrap();
        assert_eq!(new.quote(), "Hello");
        assert_eq!(new.author(), "World");
    }

    #[test]
    fn test_new_quote_requires_fields() {
        let err = NewQuote::new(None, Some("Author".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "quote is required");

        let err = NewQuote::new(Some("Text".to_string()), Some("   ".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "author is required");
    }

    #[test]
    fn test_quote_serializes_without_id() {
        let quote = Quote {
            id: QuoteId::new(7),
            quote: "Hello".to_string(),
            author: "World".to_string(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({"quote": "Hello", "author": "World"}));
    }
}
