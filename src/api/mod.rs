//! # API Layer
//!
//! Talks JSON to the movie site's backend. The rest of the app only sees
//! the [`SuggestSource`] trait and the typed records in [`types`].

pub mod client;
pub mod types;

pub use client::{ApiError, HttpSuggestSource, SuggestSource};
pub use types::{SuggestResponse, SuggestionItem};
