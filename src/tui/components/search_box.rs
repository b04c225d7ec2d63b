//! # SearchBox Component
//!
//! Single-line text input for the search query.
//!
//! ## Responsibilities
//!
//! - Capture text input (chars, backspace, paste)
//! - Emit `QueryChanged` whenever the buffer changes
//! - Emit `Submit` on Enter (the dropdown decides what Enter means)
//!
//! The buffer is internal state; everything else about the widget
//! (what the query fetches, what shows below) belongs to core.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The buffer changed; the payload is the full new query.
    QueryChanged(String),
    /// Enter pressed.
    Submit,
}

pub struct SearchBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Area of the last render, for mouse hit testing.
    area: Option<Rect>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            area: None,
        }
    }

    /// Whether a terminal cell falls inside the rendered box.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .is_some_and(|a| a.contains(Position { x, y }))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);

        let inner_width = area.width.saturating_sub(2);
        let text_width = self.buffer.width() as u16;
        // Scroll left just enough to keep the cursor cell in view when
        // the query outgrows the box.
        let scroll = text_width.saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title(" Search movies "))
            .style(Style::default().fg(Color::White))
            .scroll((0, scroll));
        frame.render_widget(input, area);

        // Cursor sits after the visible text; with scroll active that is
        // the last inner column.
        frame.set_cursor_position(Position {
            x: area.x + 1 + text_width.saturating_sub(scroll),
            y: area.y + 1,
        });
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Paste(data) => {
                // A query is one line; strip whatever the paste brought in.
                let cleaned: String = data.chars().filter(|c| !c.is_control()).collect();
                if cleaned.is_empty() {
                    return None;
                }
                self.buffer.push_str(&cleaned);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.buffer.pop().is_some() {
                    Some(SearchEvent::QueryChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            _ => None,
        }
    }
}
