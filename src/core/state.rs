//! # Application State
//!
//! Core business state for the suggestion widget. This module contains
//! domain logic only - no TUI-specific types. Presentation state lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── query: String                  // text in the search box
//! ├── items: Vec<SuggestionItem>     // last applied result set
//! ├── active: Option<usize>          // highlighted row (None = no row)
//! ├── visible: bool                  // dropdown shown
//! ├── is_loading: bool               // fetch scheduled or in flight
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Two invariants hold after every transition:
//! - `active` is `None` or a valid index into `items`
//! - `visible` is false whenever `items` is empty

use std::time::Duration;

use crate::api::SuggestionItem;

/// Queries shorter than this issue no fetch at all.
pub const MIN_QUERY_CHARS: usize = 2;

/// Quiet period after the last keystroke before a fetch is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Grace period after losing focus before the dropdown hides, long enough
/// for a click on a suggestion to land first.
pub const BLUR_GRACE: Duration = Duration::from_millis(120);

/// Rows visible in the dropdown before it scrolls. The backend caps the
/// result count, not the client.
pub const MAX_VISIBLE_ROWS: u16 = 8;

pub struct App {
    pub query: String,
    pub items: Vec<SuggestionItem>,
    pub active: Option<usize>,
    pub visible: bool,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            items: Vec::new(),
            active: None,
            visible: false,
            is_loading: false,
            status_message: String::from("Type at least 2 characters to search"),
        }
    }

    /// The movie page a selection navigates to.
    pub fn movie_url(base_url: &str, id: u64) -> String {
        format!("{}/movie/{id}", base_url.trim_end_matches('/'))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
