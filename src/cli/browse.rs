//! Browse command handler: the interactive TUI.

use super::exit_codes;
use crate::config::AppConfig;
use crate::tui::{run_tui, App, EventHandler};
use anyhow::{Context, Result};

/// Run the interactive browser.
///
/// `state` is an optional share string (`q=...&sort=...`) restoring a
/// bookmarked view before the first frame.
pub fn run_browse(config: &AppConfig, state: Option<&str>) -> Result<i32> {
    let events = EventHandler::default();
    let mut app = App::new(config, events.sender()).context("initializing browser")?;

    if let Some(state) = state {
        app.apply_state_string(state)
            .context("parsing --state share string")?;
    }

    run_tui(&mut app, &events).context("terminal session")?;
    Ok(exit_codes::SUCCESS)
}
