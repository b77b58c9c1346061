//! # Quote Service
//!
//! Entry point shared by the HTTP surface. Read operations live in
//! `query.rs`, write operations in `mutation.rs`.

use std::sync::Arc;

use super::api_key::ApiKey;
use super::store::QuoteStore;

/// Query and mutation layer over a quote store
pub struct QuoteService {
    pub(super) store: Arc<dyn QuoteStore>,
    pub(super) api_key: ApiKey,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>, api_key: ApiKey) -> Self {
        Self { store, api_key }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn QuoteStore> {
        &self.store
    }
}
