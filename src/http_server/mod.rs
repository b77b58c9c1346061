//! # HTTP Server Module
//!
//! Axum server exposing the quote collection.
//!
//! # Endpoints
//!
//! - `/` - Landing page
//! - `/random`, `/all`, `/search` - Reads
//! - `/add`, `/update-quote/:id`, `/delete/:id` - Writes, gated by `api-key`
//! - `/health` - Health check

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod quote_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
