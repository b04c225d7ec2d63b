use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, MAX_VISIBLE_ROWS};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SuggestList, TitleBar};

/// Lay out one frame: title line, search box, and — while visible — the
/// suggestion dropdown overlaying whatever sits under the search box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, base_url: &str) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [title_area, search_area, below_area] = layout.areas(frame.area());

    TitleBar::new(
        base_url.to_string(),
        app.status_message.clone(),
        app.is_loading,
    )
    .render(frame, title_area);

    tui.search_box.render(frame, search_area);

    if app.visible && !app.items.is_empty() {
        let rows = (app.items.len() as u16).min(MAX_VISIBLE_ROWS);
        let dropdown = Rect {
            x: search_area.x,
            y: search_area.y + search_area.height,
            width: search_area.width,
            height: (rows + 2).min(below_area.height), // +2 for the borders
        };
        if dropdown.height > 2 {
            SuggestList::new(&mut tui.suggest_list, &app.items, app.active)
                .render(frame, dropdown);
            return;
        }
    }
    // Hidden (or no room): a stale rectangle must not keep eating clicks.
    tui.suggest_list.clear_area();
}
