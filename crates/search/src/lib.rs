//! Web search collector.
//!
//! Queries the search provider once per run and reduces the response to a
//! bounded list of `(title, body)` snippets used as model context.

pub mod client;

pub use client::SearchClient;
