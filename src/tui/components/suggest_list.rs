//! # SuggestList Component
//!
//! The suggestion dropdown: one row per movie, rendered directly under the
//! search box. A row shows a poster marker (a thumbnail has no terminal
//! equivalent), the title, the release year, and the rating — the last
//! three omitted gracefully when the backend didn't send them.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SuggestListState` lives in `TuiState` (scroll offset, hit-test cache)
//! - `SuggestList` is created each frame with borrowed state
//!
//! Rendering is a pure function of `(items, active)`: exactly one row
//! carries the highlight, matching `active`, or none at all.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::SuggestionItem;

/// Persistent state for the dropdown.
pub struct SuggestListState {
    pub list_state: ListState,
    /// Area of the last render; None while the dropdown is hidden.
    area: Option<Rect>,
    /// Item count at the last render, bounding hit-test results.
    row_count: usize,
}

impl SuggestListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            area: None,
            row_count: 0,
        }
    }

    /// Forget the rendered area. Called when the dropdown is hidden so a
    /// stale rectangle can't swallow mouse events.
    pub fn clear_area(&mut self) {
        self.area = None;
        self.row_count = 0;
    }

    /// Whether a terminal cell falls inside the rendered dropdown.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|a| a.contains(Position { x, y }))
    }

    /// Map a terminal cell to the item index of the row under it.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.area?;
        // Inside the borders only.
        if x <= area.x || x >= area.x + area.width.saturating_sub(1) {
            return None;
        }
        if y <= area.y || y >= area.y + area.height.saturating_sub(1) {
            return None;
        }
        let row = (y - area.y - 1) as usize + self.list_state.offset();
        (row < self.row_count).then_some(row)
    }
}

impl Default for SuggestListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the dropdown.
pub struct SuggestList<'a> {
    state: &'a mut SuggestListState,
    items: &'a [SuggestionItem],
    active: Option<usize>,
}

impl<'a> SuggestList<'a> {
    pub fn new(
        state: &'a mut SuggestListState,
        items: &'a [SuggestionItem],
        active: Option<usize>,
    ) -> Self {
        Self {
            state,
            items,
            active,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = Some(area);
        self.state.row_count = self.items.len();
        // ListState keeps the selected row scrolled into view.
        self.state.list_state.select(self.active);

        // The dropdown overlays whatever is below the search box.
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Suggestions ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Close ").centered());

        let inner_width = area.width.saturating_sub(2) as usize;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                ListItem::new(suggestion_row(
                    item,
                    self.active == Some(i),
                    inner_width,
                ))
            })
            .collect();

        let list = List::new(rows).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Build the spans for one dropdown row.
fn suggestion_row(item: &SuggestionItem, is_active: bool, inner_width: usize) -> Line<'static> {
    let base = if is_active {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };

    let year = item.release_year().map(|y| y.to_string());
    let score = item.score_label();

    // Fixed-width tail so titles line up: "  2022  IMDB: 7.8"
    let mut tail = String::new();
    if let Some(ref y) = year {
        tail.push_str("  ");
        tail.push_str(y);
    }
    if let Some(ref s) = score {
        tail.push_str("  IMDB: ");
        tail.push_str(s);
    }

    let marker_present = item.poster_path.is_some();
    let marker_width = 2;
    let title_width = inner_width
        .saturating_sub(marker_width)
        .saturating_sub(tail.width());
    let title = truncate_to_width(&item.title, title_width);

    let mut spans = vec![
        if marker_present {
            Span::styled(
                "▌ ",
                if is_active {
                    base
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            )
        } else {
            Span::styled("  ", base)
        },
        Span::styled(title, base.add_modifier(Modifier::BOLD)),
    ];

    if let Some(y) = year {
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(
            y,
            if is_active {
                base
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
    }

    if let Some(s) = score {
        spans.push(Span::styled("  IMDB: ", base));
        spans.push(Span::styled(
            s,
            if is_active {
                base
            } else {
                Style::default().fg(Color::Yellow)
            },
        ));
    }

    Line::from(spans)
}

/// Truncate a string to fit within `max_width` terminal cells, appending
/// "…" when anything was cut. Unicode-aware: measures display width, never
/// splits inside a character.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
