//! # Actions
//!
//! Everything that can happen to the widget becomes an `Action`.
//! User types a character? That's `Action::QueryChanged`.
//! A fetch finishes? That's `Action::SuggestionsReceived`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect`. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable without a terminal or a server:
//! drive `update()` with a sequence of actions and assert on the state.

use log::debug;

use crate::api::SuggestionItem;
use crate::core::state::{App, MIN_QUERY_CHARS};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The search box text changed.
    QueryChanged(String),
    /// A fetch finished. `query` is the query the request was issued for,
    /// so stale responses can be recognized and discarded.
    SuggestionsReceived {
        query: String,
        results: Vec<SuggestionItem>,
    },
    /// A fetch failed (network, HTTP status, or parse). Silent degrade.
    FetchFailed { query: String },
    /// ArrowDown: move the highlight one row down.
    CursorDown,
    /// ArrowUp: move the highlight one row up (row 0 → no highlight).
    CursorUp,
    /// Mouse moved over row `i`.
    HoverItem(usize),
    /// Mouse clicked row `i`.
    ActivateItem(usize),
    /// Enter pressed in the search box.
    Submit,
    /// Escape: hide the dropdown, or quit when already hidden.
    Escape,
    /// Terminal gained focus.
    FocusGained,
    /// Terminal lost focus.
    FocusLost,
    /// The blur grace timer fired.
    HideAfterGrace,
    /// Mouse clicked outside the search box and dropdown.
    ClickOutside,
    /// Ctrl+C.
    Quit,
}

/// Side effects the TUI loop must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start (or restart) the debounced fetch for this query.
    ScheduleFetch(String),
    /// Drop any pending scheduled fetch.
    CancelFetch,
    /// Start the blur grace timer.
    ScheduleHide,
    /// Cancel a pending blur grace timer.
    CancelHide,
    /// Leave the TUI and open the movie page for this id.
    Navigate(u64),
    Quit,
}

/// The reducer. Applies `action` to `app` and reports what I/O, if any,
/// the caller should perform.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QueryChanged(query) => {
            app.query = query;
            if app.query.chars().count() < MIN_QUERY_CHARS {
                app.items.clear();
                app.active = None;
                app.visible = false;
                app.is_loading = false;
                app.status_message = String::from("Type at least 2 characters to search");
                Effect::CancelFetch
            } else {
                app.is_loading = true;
                Effect::ScheduleFetch(app.query.clone())
            }
        }

        Action::SuggestionsReceived { query, results } => {
            if query != app.query {
                // A later query already owns the state; drop this response.
                debug!("Discarding stale results for {query:?} (current: {:?})", app.query);
                return Effect::None;
            }
            app.items = results;
            app.active = None;
            app.visible = !app.items.is_empty();
            app.is_loading = false;
            app.status_message = if app.items.is_empty() {
                String::from("No matches")
            } else {
                format!("{} match(es)", app.items.len())
            };
            Effect::None
        }

        Action::FetchFailed { query } => {
            // Silent degrade: dropdown keeps whatever it showed before.
            if query == app.query {
                app.is_loading = false;
            }
            Effect::None
        }

        Action::CursorDown => {
            if app.visible && !app.items.is_empty() {
                app.active = Some(match app.active {
                    Some(i) => (i + 1).min(app.items.len() - 1),
                    None => 0,
                });
            }
            Effect::None
        }

        Action::CursorUp => {
            if app.visible {
                app.active = match app.active {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
            }
            Effect::None
        }

        Action::HoverItem(i) => {
            if app.visible && i < app.items.len() {
                app.active = Some(i);
            }
            Effect::None
        }

        Action::ActivateItem(i) => {
            if app.visible {
                if let Some(item) = app.items.get(i) {
                    return Effect::Navigate(item.id);
                }
            }
            Effect::None
        }

        Action::Submit => {
            if app.visible {
                if let Some(item) = app.active.and_then(|i| app.items.get(i)) {
                    return Effect::Navigate(item.id);
                }
            }
            Effect::None
        }

        Action::Escape => {
            if app.visible {
                // Hide without clearing; focus brings the list back.
                app.visible = false;
                Effect::None
            } else {
                Effect::Quit
            }
        }

        Action::FocusGained => {
            if !app.items.is_empty() {
                app.visible = true;
            }
            Effect::CancelHide
        }

        Action::FocusLost => Effect::ScheduleHide,

        Action::HideAfterGrace | Action::ClickOutside => {
            app.visible = false;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
