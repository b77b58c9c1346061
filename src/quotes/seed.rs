//! # Seed File Parsing
//!
//! Bulk-load format, one quote per line:
//!
//! ```text
//! "The secret of getting ahead is getting started." ~ Mark Twain
//! ```
//!
//! Lines that do not split into exactly two non-blank parts on `~` are
//! skipped.

use tracing::debug;

use super::model::NewQuote;

/// Parse one seed line
pub fn parse_line(line: &str) -> Option<NewQuote> {
    let parts: Vec<&str> = line.trim().split('~').collect();
    if parts.len() != 2 {
        return None;
    }

    let quote = parts[0].trim().trim_matches('"');
    let author = parts[1].trim();

    NewQuote::new(Some(quote.to_string()), Some(author.to_string())).ok()
}

/// Parse a whole seed file, skipping malformed lines
pub fn parse(content: &str) -> Vec<NewQuote> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                debug!(line = i + 1, "Skipping malformed seed line");
            }
            parsed
        })
        .collect()
}
