//! Event handling for the browser.
//!
//! A dedicated thread pumps crossterm events (plus a tick heartbeat) into
//! an mpsc channel; background data operations deliver their results into
//! the same channel, so the main loop is a single ordered stream and all
//! state mutation stays on one thread.

use super::app::{App, Tab, EXPORT_FORMATS};
use super::constants::TICK_RATE;
use super::state::ListNavigation;
use super::viewmodel::OverlayKind;
use crate::data::DataEvent;
use crate::view::SortKey;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::io;
use std::sync::mpsc;
use std::thread;

/// Events consumed by the main loop.
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Tick,
    Data(DataEvent),
}

/// Event handler owning the pump thread and the channel.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(TICK_RATE).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => event_tx.send(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => event_tx.send(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                        Ok(CrosstermEvent::FocusGained) => event_tx.send(Event::FocusGained),
                        Ok(CrosstermEvent::FocusLost) => event_tx.send(Event::FocusLost),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        break;
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }
}

impl EventHandler {
    /// Next event, blocking.
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }

    /// A sender for background workers to deliver into the same stream.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }
}

/// Dispatch one event against the app state.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::FocusGained => app.motion.set_focused(true),
        Event::FocusLost => app.motion.set_focused(false),
        Event::Tick => app.on_tick(),
        Event::Data(data) => app.on_data_event(data),
        _ => {}
    }
}

/// Handle key events.
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Search entry mode swallows everything
    if app.search.active {
        match key.code {
            KeyCode::Esc => {
                let restored = app.search.cancel();
                app.apply_search(restored);
            }
            KeyCode::Enter => {
                let query = app.search.commit();
                app.apply_search(query);
            }
            KeyCode::Backspace => app.search.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search.push_char(c);
            }
            _ => {}
        }
        return;
    }

    // An open overlay takes the keys next
    if let Some(kind) = app.overlay.current() {
        handle_overlay_key(app, kind, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Tabs
        KeyCode::Tab | KeyCode::Char('m') => {
            let next = match app.active_tab {
                Tab::Devices => Tab::Methodology,
                Tab::Methodology => Tab::Devices,
            };
            app.set_tab(next);
        }

        _ => match app.active_tab {
            Tab::Devices => handle_devices_key(app, key),
            Tab::Methodology => handle_methodology_key(app, key),
        },
    }
}

fn handle_devices_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.table.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.table.select_next(),
        KeyCode::PageUp => app.table.page_up(),
        KeyCode::PageDown => app.table.page_down(),
        KeyCode::Home => app.table.go_first(),
        KeyCode::End => app.table.go_last(),

        // Search
        KeyCode::Char('/') => app.search.start(&app.filter.search.clone()),

        // Sorting
        KeyCode::Char('n') => app.toggle_sort(SortKey::Name),
        KeyCode::Char('b') => app.toggle_sort(SortKey::Brand),
        KeyCode::Char('s') => app.toggle_sort(SortKey::Score),
        KeyCode::Char('g') => app.toggle_sort(SortKey::TeardownCount),

        // Filters
        KeyCode::Char('f') => app.cycle_brand(true),
        KeyCode::Char('F') => app.cycle_brand(false),
        KeyCode::Char(']') => app.adjust_score_filter(true),
        KeyCode::Char('[') => app.adjust_score_filter(false),
        KeyCode::Char('u') => app.toggle_unscored(),
        KeyCode::Char('x') => app.clear_filters(),

        // Selection / comparison
        KeyCode::Char(' ') => app.toggle_selection(),
        KeyCode::Char('c') => app.open_compare(),
        KeyCode::Char('C') => app.clear_selection(),

        // Overlays
        KeyCode::Char('t') | KeyCode::Enter => app.toggle_overlay(OverlayKind::Teardowns),
        KeyCode::Char('e') => app.toggle_overlay(OverlayKind::ExportMenu),
        KeyCode::Char('i') => app.toggle_overlay(OverlayKind::Info),
        KeyCode::Char('?') => app.toggle_overlay(OverlayKind::Help),

        // Clipboard / data
        KeyCode::Char('y') => app.copy_share_string(),
        KeyCode::Char('Y') => app.copy_device_link(),
        KeyCode::Char('r') => app.request_refresh(true),
        KeyCode::Char('T') => app.toggle_theme(),

        _ => {}
    }
}

fn handle_methodology_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.rubric_versions.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.rubric_versions.select_next(),
        KeyCode::Enter => {
            if app.rubric.ready().is_some() {
                app.toggle_overlay(OverlayKind::RubricVersion);
            }
        }
        KeyCode::Char('r') => {
            // Retry a failed rubric load
            if app.rubric.wants_load() {
                app.set_tab(Tab::Methodology);
            }
        }
        KeyCode::Char('?') => app.toggle_overlay(OverlayKind::Help),
        KeyCode::Char('T') => app.toggle_theme(),
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, kind: OverlayKind, key: KeyEvent) {
    // Escape always closes; the trigger key re-toggles (closes) below
    if key.code == KeyCode::Esc {
        app.close_overlay();
        return;
    }

    match kind {
        OverlayKind::Teardowns => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.overlay_menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.overlay_menu.select_next(),
            KeyCode::Enter => {
                let url = app.selected_device().and_then(|d| {
                    crate::view::ordered_teardowns(&d.teardown_urls)
                        .get(app.overlay_menu.selected)
                        .map(|t| t.url.clone())
                });
                if let Some(url) = url {
                    if super::clipboard::copy_to_clipboard(&url) {
                        app.status.set(format!("Copied {url}"));
                    } else {
                        app.status.set("Clipboard unavailable");
                    }
                }
            }
            KeyCode::Char('t') => app.toggle_overlay(OverlayKind::Teardowns),
            _ => {}
        },
        OverlayKind::ExportMenu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.overlay_menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.overlay_menu.select_next(),
            KeyCode::Enter => {
                let format = EXPORT_FORMATS[app.overlay_menu.selected.min(EXPORT_FORMATS.len() - 1)];
                app.export_current(format);
            }
            KeyCode::Char('e') => app.toggle_overlay(OverlayKind::ExportMenu),
            _ => {}
        },
        OverlayKind::Info => {
            if key.code == KeyCode::Char('i') {
                app.toggle_overlay(OverlayKind::Info);
            }
        }
        OverlayKind::Help => {
            if key.code == KeyCode::Char('?') {
                app.toggle_overlay(OverlayKind::Help);
            }
        }
        OverlayKind::Compare => match key.code {
            KeyCode::Char('c') => app.toggle_overlay(OverlayKind::Compare),
            KeyCode::Char('C') => {
                app.clear_selection();
                app.close_overlay();
            }
            _ => {}
        },
        OverlayKind::RubricVersion => {
            if key.code == KeyCode::Enter {
                app.close_overlay();
            }
        }
    }
}

/// Handle mouse events: row selection, wheel scrolling, and
/// outside-click overlay dismissal.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A click outside an open overlay closes it
            if app.overlay.has_overlay() {
                let inside = app
                    .overlay_rect
                    .is_some_and(|rect| rect.contains(position));
                if !inside {
                    app.close_overlay();
                }
                return;
            }
            if app.active_tab == Tab::Devices && app.table_area.contains(position) {
                let row = app.table.scroll_offset
                    + usize::from(mouse.row.saturating_sub(app.table_area.y));
                if row < app.view.len() {
                    app.table.set_selected(row);
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if app.active_tab == Tab::Devices && !app.overlay.has_overlay() {
                app.table.select_prev();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.active_tab == Tab::Devices && !app.overlay.has_overlay() {
                app.table.select_next();
            }
        }
        _ => {}
    }
}
