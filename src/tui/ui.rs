//! Frame layout and the terminal main loop.

use super::app::{App, Tab};
use super::events::{handle_event, EventHandler};
use super::theme::{colors, Styles};
use super::views::{render_chart, render_methodology, render_overlays, render_table};
use super::widgets::{render_size_warning, truncate_str, MIN_HEIGHT, MIN_WIDTH};
use crate::data::LoadState;
use crate::view::badge_tags;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Run the interactive browser until the user quits.
///
/// The caller owns the [`EventHandler`] because the app needs its sender
/// before the first frame (the initial fetch delivers into it).
pub fn run_tui(app: &mut App, events: &EventHandler) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app, events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, app))?;
        handle_event(app, events.next()?);
    }
    Ok(())
}

/// Paint one frame.
pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_size_warning(frame, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(1), // filter bar
            Constraint::Min(5),    // main
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, app, layout[0]);
    render_filter_bar(frame, app, layout[1]);

    match app.active_tab {
        Tab::Devices => {
            let main = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(layout[2]);
            render_table(frame, app, main[0]);

            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(main[1]);
            render_chart(frame, app, right[0]);
            render_detail(frame, app, right[1]);
        }
        Tab::Methodology => render_methodology(frame, app, layout[2]),
    }

    render_footer(frame, app, layout[3]);

    // Overlays last, on top of everything
    render_overlays(frame, app, area);
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Decorative shimmer sits behind the title line
    app.motion.render(frame, rows[0]);

    let tab_label = |tab: Tab, label: &str, key: &str| -> Vec<Span<'static>> {
        if app.active_tab == tab {
            vec![Span::styled(
                format!(" {label} "),
                Style::default().fg(scheme.badge_fg).bg(scheme.primary).bold(),
            )]
        } else {
            vec![
                Span::styled(format!("[{key}]"), Style::default().fg(scheme.text_muted)),
                Span::styled(format!(" {label} "), Style::default().fg(scheme.text_muted)),
            ]
        }
    };

    let mut spans = vec![Span::styled(
        " fixgrade ",
        Style::default().fg(scheme.badge_fg).bg(scheme.accent).bold(),
    )];
    spans.push(Span::raw("  "));
    spans.extend(tab_label(Tab::Devices, "Devices", "m"));
    spans.extend(tab_label(Tab::Methodology, "Methodology", "m"));

    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    // Right side of the second row: freshness chip (the info trigger)
    let freshness = match &app.freshness {
        LoadState::Ready(Some(timestamp)) => {
            format!("data: {}", timestamp.format("%Y-%m-%d"))
        }
        _ => "data: [i]nfo".to_string(),
    };
    let chip_width = freshness.len() as u16 + 2;
    let chip_area = Rect::new(
        area.right().saturating_sub(chip_width),
        rows[1].y,
        chip_width.min(area.width),
        1,
    );
    app.info_anchor = chip_area;
    frame.render_widget(
        Paragraph::new(Span::styled(freshness, Style::default().fg(scheme.text_muted))),
        chip_area,
    );

    // Persistent error banner on the second row; prior data stays visible
    if let Some(err) = &app.data_error {
        if app.dataset_published {
            let banner_area = Rect::new(
                area.x,
                rows[1].y,
                area.width.saturating_sub(chip_width + 1),
                1,
            );
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" ⚠ ", Style::default().fg(scheme.badge_fg).bg(scheme.error)),
                    Span::styled(
                        format!(" refresh failed: {} (showing previous data, [r] retries)", truncate_str(err, 60)),
                        Style::default().fg(scheme.error),
                    ),
                ])),
                banner_area,
            );
        }
    }
}

fn render_filter_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let mut spans: Vec<Span> = Vec::new();

    if app.search.active {
        spans.push(Span::styled("/", Style::default().fg(scheme.primary).bold()));
        spans.push(Span::styled(
            app.search.buffer.clone(),
            Style::default().fg(scheme.text),
        ));
        spans.push(Span::styled("▏", Style::default().fg(scheme.primary)));
    } else {
        let chips = app.filter.chips();
        if chips.is_empty() {
            spans.push(Span::styled(
                "no filters - [/] search, [f] brand, [[]/[]] score, [u] unscored",
                Style::default().fg(scheme.muted),
            ));
        } else {
            spans.push(Span::styled("filters: ", Style::default().fg(scheme.text_muted)));
            for (i, chip) in chips.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {chip} "),
                    Style::default().fg(scheme.badge_fg).bg(scheme.primary),
                ));
            }
            spans.push(Span::styled(
                "  [x] clear",
                Style::default().fg(scheme.muted),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(device) = app.selected_device() else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        truncate_str(&device.name, inner.width as usize),
        Style::default().fg(scheme.text).bold(),
    ))];

    if let Some(title) = &device.title {
        if title != &device.name {
            lines.push(Line::from(Span::styled(
                truncate_str(title, inner.width as usize),
                Styles::muted(),
            )));
        }
    }
    if let Some(brand) = &device.brand {
        lines.push(detail_line("Brand", brand.clone()));
    }
    match device.repairability_score {
        Some(score) => {
            let band = match score {
                s if s >= 8.0 => "good",
                s if s >= 5.0 => "fair",
                _ => "poor",
            };
            lines.push(Line::from(vec![
                Span::styled("Score: ", Styles::muted()),
                Span::styled(
                    format!(" {score}/10 {band} "),
                    Style::default()
                        .fg(scheme.badge_fg)
                        .bg(scheme.score_color(Some(score)))
                        .bold(),
                ),
            ]));
        }
        None => lines.push(detail_line("Score", "unscored".to_string())),
    }
    if let Some(version) = &device.scorecard_version {
        lines.push(detail_line("Rubric", format!("v{version}")));
    }
    if let Some(link) = &device.link {
        lines.push(Line::from(vec![
            Span::styled("Link: ", Styles::muted()),
            Span::styled(
                truncate_str(link, inner.width.saturating_sub(8) as usize),
                Style::default().fg(scheme.primary),
            ),
        ]));
    }

    let guides = device.teardown_count();
    if guides > 0 {
        let tags = badge_tags(&device.teardown_urls);
        let tag_text = if tags.is_empty() {
            String::new()
        } else {
            format!(
                " ({})",
                tags.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
            )
        };
        lines.push(detail_line(
            "Guides",
            format!("{guides}{tag_text} - [t] to browse"),
        ));
    } else {
        lines.push(detail_line("Guides", "none".to_string()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::muted()),
        Span::styled(value, Style::default().fg(colors().text)),
    ])
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();

    // A transient status message replaces the hints until it expires
    if let Some(message) = app.status.message() {
        let message = message.to_string();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(scheme.success)),
                Span::styled(message, Style::default().fg(scheme.text)),
            ])),
            area,
        );
        return;
    }

    let selection = if app.selection.is_empty() {
        String::new()
    } else {
        format!("  {} selected", app.selection.len())
    };
    let hints = Line::from(vec![
        Span::styled("[/]", Style::default().fg(scheme.accent)),
        Span::styled(" search ", Styles::muted()),
        Span::styled("[Space]", Style::default().fg(scheme.accent)),
        Span::styled(" select ", Styles::muted()),
        Span::styled("[c]", Style::default().fg(scheme.accent)),
        Span::styled(" compare ", Styles::muted()),
        Span::styled("[e]", Style::default().fg(scheme.accent)),
        Span::styled(" export ", Styles::muted()),
        Span::styled("[?]", Style::default().fg(scheme.accent)),
        Span::styled(" help ", Styles::muted()),
        Span::styled("[q]", Style::default().fg(scheme.accent)),
        Span::styled(" quit", Styles::muted()),
        Span::styled(selection, Style::default().fg(scheme.accent)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
