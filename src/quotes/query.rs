//! # Query Layer
//!
//! Random selection, list-all and author search.

use rand::seq::SliceRandom;

use super::errors::{QuoteError, QuoteResult};
use super::model::{title_case, Quote};
use super::service::QuoteService;

impl QuoteService {
    /// One quote chosen uniformly at random.
    ///
    /// `EmptyCollection` when there is nothing to choose from.
    pub async fn random(&self) -> QuoteResult<Quote> {
        let quotes = self.store.list_all().await?;
        quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(QuoteError::EmptyCollection)
    }

    /// Every quote in insertion order
    pub async fn list_all(&self) -> QuoteResult<Vec<Quote>> {
        self.store.list_all().await
    }

    /// Quotes by `author`, matched after title-casing the term.
    ///
    /// `AuthorNotFound` when nothing matches.
    pub async fn search_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        let author = title_case(author);
        let quotes = self.store.list_by_author(&author).await?;

        if quotes.is_empty() {
            return Err(QuoteError::AuthorNotFound(author));
        }
        Ok(quotes)
    }
}
