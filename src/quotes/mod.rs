//! # Quotes
//!
//! The quote collection: model, storage contract, and the query and
//! mutation layers served over HTTP.
//!
//! # Invariants
//!
//! - Persisted quotes always have non-blank text and author.
//! - Authors are stored in title case; author search title-cases the term.
//! - Mutations require the shared api key and run in one transaction each.

mod api_key;
mod errors;
mod model;
mod mutation;
mod query;
mod service;
mod sqlite;
mod store;

pub mod seed;

pub use api_key::ApiKey;
pub use errors::{QuoteError, QuoteResult};
pub use model::{title_case, NewQuote, Quote, QuoteId};
pub use service::QuoteService;
pub use sqlite::SqliteQuoteStore;
pub use store::QuoteStore;
