//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status line showing the target site and fetch status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: single-line query input, emits `SearchEvent`s
//! - `SuggestList`: the dropdown; persistent `SuggestListState` holds the
//!   scroll offset and the hit-test cache, a transient `SuggestList`
//!   wrapper is built each frame with borrowed item data
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (function parameters), not
//! by reaching into global state. Core owns what the user searched for and
//! what came back; components own presentation details like scroll offsets
//! and rendered rectangles. Each component file contains its state types,
//! event types, rendering logic, and tests.

pub mod search_box;
pub mod suggest_list;
pub mod title_bar;

pub use search_box::{SearchBox, SearchEvent};
pub use suggest_list::{SuggestList, SuggestListState};
pub use title_bar::TitleBar;
