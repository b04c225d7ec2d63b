use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold internal
/// presentation state, and render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` because rendering is where presentation
/// state gets written: the dropdown records the rectangle it was drawn
/// into (mouse hit testing needs it next event) and lets its `ListState`
/// move the scroll offset to keep the highlighted row visible; the search
/// box caches its area the same way. This aligns with Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area, updating whatever
    /// internal caches the next event dispatch will read.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits
    /// (e.g. the search box turns raw keystrokes into `SearchEvent`s).
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
