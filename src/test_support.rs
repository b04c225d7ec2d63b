//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::SuggestionItem;
use crate::core::state::App;

/// A suggestion with only the required fields set.
pub fn item(id: u64, title: &str) -> SuggestionItem {
    SuggestionItem {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: None,
        vote_average: None,
    }
}

/// An App already holding the given result set (dropdown still hidden —
/// tests flip `visible` themselves when they need it shown).
pub fn app_with_items(items: Vec<SuggestionItem>) -> App {
    let mut app = App::new();
    app.items = items;
    app
}
