//! # Mutation Layer
//!
//! Create, update and delete. Each call checks the api key before touching
//! the store; a rejected call performs no write.

use tracing::{info, warn};

use super::errors::{QuoteError, QuoteResult};
use super::model::{NewQuote, QuoteId};
use super::service::QuoteService;

impl QuoteService {
    fn authorize(&self, api_key: Option<&str>, operation: &'static str) -> QuoteResult<()> {
        self.api_key.authorize(api_key).map_err(|e| {
            warn!(operation, key_supplied = api_key.is_some(), "Rejected api key");
            e
        })
    }

    /// Insert a new quote
    pub async fn create(
        &self,
        api_key: Option<&str>,
        quote: Option<String>,
        author: Option<String>,
    ) -> QuoteResult<QuoteId> {
        self.authorize(api_key, "create")?;

        let new = NewQuote::new(quote, author)?;
        let id = self.store.create(&new).await?;

        info!(id = %id, author = %new.author(), "Quote created");
        Ok(id)
    }

    /// Replace text and author of an existing quote.
    ///
    /// An unknown id is reported as `NotFound` even when the new values are
    /// also invalid.
    pub async fn update(
        &self,
        api_key: Option<&str>,
        id: QuoteId,
        quote: Option<String>,
        author: Option<String>,
    ) -> QuoteResult<()> {
        self.authorize(api_key, "update")?;

        if self.store.get_by_id(id).await?.is_none() {
            return Err(QuoteError::NotFound(id));
        }

        let new = NewQuote::new(quote, author)?;
        self.store.update(id, &new).await?;

        info!(id = %id, "Quote updated");
        Ok(())
    }

    /// Remove a quote
    pub async fn delete(&self, api_key: Option<&str>, id: QuoteId) -> QuoteResult<()> {
        self.authorize(api_key, "delete")?;

        self.store.delete(id).await?;

        info!(id = %id, "Quote deleted");
        Ok(())
    }
}
