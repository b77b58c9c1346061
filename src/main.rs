//! quotes-api entry point
//!
//! Parses arguments and dispatches via `cli::run`; prints the error to stderr
//! and exits non-zero on failure.

use quotes_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
