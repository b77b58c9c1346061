//! quotes-api - a small HTTP service over a collection of quotations

pub mod cli;
pub mod db;
pub mod http_server;
pub mod quotes;
pub mod telemetry;
