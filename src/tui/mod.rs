//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! All timing side effects live here too: the 250 ms input debounce and
//! the 120 ms blur grace period are [`DelayedTask`]s whose callbacks feed
//! actions back into the loop over an mpsc channel, exactly like the
//! background fetch tasks do. The reducer itself never touches a clock.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 100ms in
//! `poll_event_timeout`, and only redraws after an input event or an
//! action arriving from a background task.

pub mod component;
pub mod components;
pub mod debounce;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{HttpSuggestSource, SuggestSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, BLUR_GRACE, DEBOUNCE};
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent, SuggestListState};
use crate::tui::debounce::DelayedTask;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub suggest_list: SuggestListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            suggest_list: SuggestListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, focus change)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            DisableFocusChange,
            Hide // Hide cursor on exit
        );
    }
}

/// What the loop should do after an effect was performed.
enum LoopSignal {
    Continue,
    Quit,
    Navigate(u64),
}

/// Run the search UI. Blocks until the user quits or picks a movie; a pick
/// prints the movie page URL on stdout after the terminal is restored.
///
/// Must be called from within a tokio runtime (fetches and timers are
/// spawned tasks).
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn SuggestSource> = Arc::new(HttpSuggestSource::new(config.base_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions produced by background tasks (fetches, timers)
    let (tx, rx) = mpsc::channel();

    let mut fetch_timer = DelayedTask::new(DEBOUNCE);
    let mut hide_timer = DelayedTask::new(BLUR_GRACE);

    let mut navigate_to: Option<u64> = None;
    let mut should_quit = false;
    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &config.base_url))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(100));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let action = match &tui_event {
                TuiEvent::ForceQuit => Some(Action::Quit),
                TuiEvent::Escape => Some(Action::Escape),
                TuiEvent::CursorUp => Some(Action::CursorUp),
                TuiEvent::CursorDown => Some(Action::CursorDown),
                TuiEvent::FocusGained => Some(Action::FocusGained),
                TuiEvent::FocusLost => Some(Action::FocusLost),
                TuiEvent::MouseMove(x, y) => {
                    tui.suggest_list.hit_test(*x, *y).map(Action::HoverItem)
                }
                TuiEvent::MouseClick(x, y) => {
                    if let Some(i) = tui.suggest_list.hit_test(*x, *y) {
                        Some(Action::ActivateItem(i))
                    } else if tui.search_box.contains(*x, *y)
                        || tui.suggest_list.contains(*x, *y)
                    {
                        None
                    } else {
                        Some(Action::ClickOutside)
                    }
                }
                // Everything else is text editing, handled by the SearchBox
                other => tui.search_box.handle_event(other).map(|se| match se {
                    SearchEvent::QueryChanged(q) => Action::QueryChanged(q),
                    SearchEvent::Submit => Action::Submit,
                }),
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                match handle_effect(effect, &source, &tx, &mut fetch_timer, &mut hide_timer) {
                    LoopSignal::Continue => {}
                    LoopSignal::Quit => should_quit = true,
                    LoopSignal::Navigate(id) => {
                        navigate_to = Some(id);
                        should_quit = true;
                    }
                }
            }
        }

        // Handle background task actions (fetch results, elapsed timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            match handle_effect(effect, &source, &tx, &mut fetch_timer, &mut hide_timer) {
                LoopSignal::Continue => {}
                LoopSignal::Quit => should_quit = true,
                LoopSignal::Navigate(id) => {
                    navigate_to = Some(id);
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();

    if let Some(id) = navigate_to {
        let url = App::movie_url(&config.base_url, id);
        info!("Navigating to {url}");
        println!("{url}");
    }

    Ok(())
}

/// Perform the I/O an `update()` asked for.
fn handle_effect(
    effect: Effect,
    source: &Arc<dyn SuggestSource>,
    tx: &mpsc::Sender<Action>,
    fetch_timer: &mut DelayedTask,
    hide_timer: &mut DelayedTask,
) -> LoopSignal {
    match effect {
        Effect::None => LoopSignal::Continue,
        Effect::ScheduleFetch(query) => {
            spawn_fetch(query, source.clone(), tx.clone(), fetch_timer);
            LoopSignal::Continue
        }
        Effect::CancelFetch => {
            fetch_timer.cancel();
            LoopSignal::Continue
        }
        Effect::ScheduleHide => {
            let tx = tx.clone();
            hide_timer.schedule(async move {
                if tx.send(Action::HideAfterGrace).is_err() {
                    warn!("Failed to send HideAfterGrace: receiver dropped");
                }
            });
            LoopSignal::Continue
        }
        Effect::CancelHide => {
            hide_timer.cancel();
            LoopSignal::Continue
        }
        Effect::Navigate(id) => LoopSignal::Navigate(id),
        Effect::Quit => LoopSignal::Quit,
    }
}

/// (Re)arm the debounce timer with a fetch for `query`. The response is
/// sent back tagged with the query it was issued for, so the reducer can
/// discard it if the user has typed on in the meantime.
fn spawn_fetch(
    query: String,
    source: Arc<dyn SuggestSource>,
    tx: mpsc::Sender<Action>,
    fetch_timer: &mut DelayedTask,
) {
    fetch_timer.schedule(async move {
        match source.suggest(&query).await {
            Ok(results) => {
                if tx.send(Action::SuggestionsReceived { query, results }).is_err() {
                    warn!("Failed to send suggestions: receiver dropped");
                }
            }
            Err(e) => {
                // Silent degrade in the UI; the log keeps the details.
                warn!("Suggestion fetch for {query:?} failed: {e}");
                if tx.send(Action::FetchFailed { query }).is_err() {
                    warn!("Failed to send FetchFailed: receiver dropped");
                }
            }
        }
    });
}
