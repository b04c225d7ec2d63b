//! # TitleBar Component
//!
//! One-line status bar at the top of the screen.
//!
//! Purely presentational — it receives all data as props and has no
//! internal state:
//! - `base_url`: where searches go (core config)
//! - `status_message`: transient status text (core App state)
//! - `is_loading`: whether a fetch is scheduled or in flight (core App state)
//!
//! Priority order when space is tight: the loading indicator beats the
//! status message, which beats nothing at all.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    pub base_url: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String, is_loading: bool) -> Self {
        Self {
            base_url,
            status_message,
            is_loading,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.is_loading {
            format!("Marquee ({}) | Searching…", self.base_url)
        } else if self.status_message.is_empty() {
            format!("Marquee ({})", self.base_url)
        } else {
            format!("Marquee ({}) | {}", self.base_url, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_beats_status_message() {
        let mut bar = TitleBar::new(
            "http://localhost:5000".to_string(),
            "3 match(es)".to_string(),
            true,
        );
        let text = render_to_text(&mut bar);
        assert!(text.contains("Searching…"));
        assert!(!text.contains("3 match(es)"));
    }

    #[test]
    fn test_status_message_shown_when_idle() {
        let mut bar = TitleBar::new(
            "http://localhost:5000".to_string(),
            "No matches".to_string(),
            false,
        );
        let text = render_to_text(&mut bar);
        assert!(text.contains("Marquee"));
        assert!(text.contains("No matches"));
    }

    #[test]
    fn test_bare_title_without_status() {
        let mut bar = TitleBar::new("http://localhost:5000".to_string(), String::new(), false);
        let text = render_to_text(&mut bar);
        assert!(text.contains("Marquee (http://localhost:5000)"));
        assert!(!text.contains('|'));
    }
}
