//! SQLite-backed quote store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::errors::{QuoteError, QuoteResult};
use super::model::{NewQuote, Quote, QuoteId};
use super::store::QuoteStore;

/// Quote store over an sqlx SQLite pool
#[derive(Clone)]
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn create(&self, quote: &NewQuote) -> QuoteResult<QuoteId> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO quotes (quote, author) VALUES (?, ?)")
            .bind(quote.quote())
            .bind(quote.author())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(QuoteId::new(result.last_insert_rowid()))
    }

    async fn get_by_id(&self, id: QuoteId) -> QuoteResult<Option<Quote>> {
        let quote = sqlx::query_as::<_, Quote>(
            "SELECT id, quote, author FROM quotes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quote)
    }

    async fn list_all(&self) -> QuoteResult<Vec<Quote>> {
        let quotes = sqlx::query_as::<_, Quote>("SELECT id, quote, author FROM quotes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(quotes)
    }

    async fn list_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        let quotes = sqlx::query_as::<_, Quote>(
            "SELECT id, quote, author FROM quotes WHERE author = ? ORDER BY id",
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn update(&self, id: QuoteId, quote: &NewQuote) -> QuoteResult<()> {
        let mut tx = self.pool.begin().await?;

        let changed = sqlx::query("UPDATE quotes SET quote = ?, author = ? WHERE id = ?")
            .bind(quote.quote())
            .bind(quote.author())
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if changed == 0 {
            // Dropping the transaction rolls it back.
            return Err(QuoteError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: QuoteId) -> QuoteResult<()> {
        let mut tx = self.pool.begin().await?;

        let changed = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if changed == 0 {
            return Err(QuoteError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn import(&self, quotes: &[NewQuote]) -> QuoteResult<usize> {
        let mut tx = self.pool.begin().await?;

        for quote in quotes {
            sqlx::query("INSERT INTO quotes (quote, author) VALUES (?, ?)")
                .bind(quote.quote())
                .bind(quote.author())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(quotes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn store() -> SqliteQuoteStore {
        let db = Database::connect(":memory:").await.unwrap();
        SqliteQuoteStore::new(db.pool().clone())
    }

    fn new_quote(text: &str, author: &str) -> NewQuote {
        NewQuote::new(Some(text.to_string()), Some(author.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = store().await;

        let a = store.create(&new_quote("One", "First")).await.unwrap();
        let b = store.create(&new_quote("Two", "Second")).await.unwrap();
        assert_ne!(a, b);

        let fetched = store.get_by_id(b).await.unwrap().unwrap();
        assert_eq!(fetched.id, b);
        assert_eq!(fetched.quote, "Two");
        assert_eq!(fetched.author, "Second");
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = store().await;
        assert!(store.get_by_id(QuoteId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let store = store().await;
        store.create(&new_quote("One", "A")).await.unwrap();
        store.create(&new_quote("Two", "B")).await.unwrap();
        store.create(&new_quote("Three", "C")).await.unwrap();

        let texts: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.quote)
            .collect();
        assert_eq!(texts, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_list_by_author_exact_match() {
        let store = store().await;
        store.create(&new_quote("One", "mark twain")).await.unwrap();
        store.create(&new_quote("Two", "Oscar Wilde")).await.unwrap();
        store.create(&new_quote("Three", "Mark Twain")).await.unwrap();

        let found = store.list_by_author("Mark Twain").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|q| q.author == "Mark Twain"));

        assert!(store.list_by_author("mark twain").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let store = store().await;
        let id = store.create(&new_quote("Old", "Someone")).await.unwrap();

        store.update(id, &new_quote("New", "someone else")).await.unwrap();

        let updated = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.quote, "New");
        assert_eq!(updated.author, "Someone Else");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = store().await;
        let err = store
            .update(QuoteId::new(9), &new_quote("New", "Someone"))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::NotFound(id) if id == QuoteId::new(9)));
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let store = store().await;
        let id = store.create(&new_quote("Gone", "Soon")).await.unwrap();

        store.delete(id).await.unwrap();
        assert!(store.get_by_id(id).await.unwrap().is_none());
        assert!(matches!(store.delete(id).await, Err(QuoteError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store().await;
        let first = store.create(&new_quote("One", "A")).await.unwrap();
        store.delete(first).await.unwrap();

        let second = store.create(&new_quote("Two", "B")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_import_inserts_all() {
        let store = store().await;
        let quotes = vec![new_quote("One", "A"), new_quote("Two", "B")];

        assert_eq!(store.import(&quotes).await.unwrap(), 2);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_import_writes_nothing() {
        let db = Database::connect(":memory:").await.unwrap();
        sqlx::query(
            "CREATE TRIGGER reject_boom BEFORE INSERT ON quotes WHEN NEW.quote = 'Boom' \
             BEGIN SELECT RAISE(ABORT, 'quote rejected'); END",
        )
        .execute(db.pool())
        .await
        .unwrap();
        let store = SqliteQuoteStore::new(db.pool().clone());

        let quotes = vec![new_quote("One", "A"), new_quote("Boom", "B")];
        let err = store.import(&quotes).await.unwrap_err();

        assert!(matches!(err, QuoteError::Storage(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
