//! # Quote Store
//!
//! Persistence contract for the quote collection.

use async_trait::async_trait;

use super::errors::QuoteResult;
use super::model::{NewQuote, Quote, QuoteId};

/// Storage backend for quotes.
///
/// Every mutation is its own transaction: it either commits completely or
/// leaves the collection untouched.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Insert a quote and return the assigned id
    async fn create(&self, quote: &NewQuote) -> QuoteResult<QuoteId>;

    /// Fetch one quote by id
    async fn get_by_id(&self, id: QuoteId) -> QuoteResult<Option<Quote>>;

    /// All quotes in insertion order
    async fn list_all(&self) -> QuoteResult<Vec<Quote>>;

    /// Quotes whose author equals `author` exactly
    async fn list_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>>;

    /// Replace text and author, keeping the id. `NotFound` if absent.
    async fn update(&self, id: QuoteId, quote: &NewQuote) -> QuoteResult<()>;

    /// Remove a quote. `NotFound` if absent.
    async fn delete(&self, id: QuoteId) -> QuoteResult<()>;

    /// Insert many quotes in a single transaction
    async fn import(&self, quotes: &[NewQuote]) -> QuoteResult<usize>;
}
