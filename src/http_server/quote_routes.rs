//! Quote HTTP Routes
//!
//! Landing page, read endpoints, and the api-key gated mutations.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        Form, Path, Query, State,
    },
    response::Html,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::quotes::{QuoteId, QuoteService};

use super::errors::{ApiError, ApiResult};
use super::response::{
    DeleteResponse, MutationResponse, QuotesResponse, RandomQuoteResponse, SearchResponse,
};

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyParams {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddQuoteForm {
    pub quote: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuoteParams {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
    pub new_quote: Option<String>,
    pub new_author: Option<String>,
}

// ==================
// Quote Routes
// ==================

/// Create quote routes
pub fn quote_routes(service: Arc<QuoteService>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/random", get(random_handler))
        .route("/all", get(all_handler))
        .route("/search", get(search_handler))
        .route("/add", post(add_handler))
        .route("/delete/:id", delete(delete_handler))
        .route("/update-quote/:id", patch(update_handler))
        .with_state(service)
}

async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

// ==================
// Query Handlers
// ==================

async fn random_handler(
    State(service): State<Arc<QuoteService>>,
) -> ApiResult<Json<RandomQuoteResponse>> {
    let quote = service
        .random()
        .await
        .map_err(|e| ApiError::from_quote_error("load a random quote", e))?;

    Ok(Json(RandomQuoteResponse { quote }))
}

async fn all_handler(State(service): State<Arc<QuoteService>>) -> ApiResult<Json<QuotesResponse>> {
    let quotes = service
        .list_all()
        .await
        .map_err(|e| ApiError::from_quote_error("load the quotes", e))?;

    Ok(Json(QuotesResponse { quotes }))
}

async fn search_handler(
    State(service): State<Arc<QuoteService>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let author = params.author.ok_or(ApiError::MissingParam("author"))?;

    let quote = service
        .search_by_author(&author)
        .await
        .map_err(|e| ApiError::from_quote_error("search the quotes", e))?;

    Ok(Json(SearchResponse { quote }))
}

// ==================
// Mutation Handlers
// ==================

// An unreadable body counts as missing fields; the api key is checked first.
async fn add_handler(
    State(service): State<Arc<QuoteService>>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
    form: Result<Form<AddQuoteForm>, FormRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Query(params) = params?;
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable add form");
            AddQuoteForm::default()
        }
    };

    service
        .create(params.api_key.as_deref(), form.quote, form.author)
        .await
        .map_err(|e| ApiError::from_quote_error("add the new quote", e))?;

    Ok(Json(MutationResponse::success(
        "Successfully added the new quote.",
    )))
}

async fn delete_handler(
    State(service): State<Arc<QuoteService>>,
    id: Result<Path<QuoteId>, PathRejection>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;
    let Query(params) = params?;

    service
        .delete(params.api_key.as_deref(), id)
        .await
        .map_err(|e| ApiError::from_quote_error("delete the quote", e))?;

    Ok(Json(DeleteResponse::success(
        "Successfully deleted the quote.",
    )))
}

async fn update_handler(
    State(service): State<Arc<QuoteService>>,
    id: Result<Path<QuoteId>, PathRejection>,
    params: Result<Query<UpdateQuoteParams>, QueryRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Path(id) = id?;
    let Query(params) = params?;

    service
        .update(
            params.api_key.as_deref(),
            id,
            params.new_quote,
            params.new_author,
        )
        .await
        .map_err(|e| ApiError::from_quote_error("update the quote", e))?;

    Ok(Json(MutationResponse::success(
        "Successfully updated the quote.",
    )))
}
