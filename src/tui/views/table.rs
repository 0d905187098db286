//! The device table.

use crate::model::Device;
use crate::tui::app::App;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_empty_state, render_error_state, truncate_str};
use crate::view::{badge_tags, SortKey};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

/// Render the device table, recording the body area and the selected
/// row's on-screen rect for mouse handling and overlay anchoring.
pub(crate) fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();

    let block = Block::default()
        .title(format!(" Devices ({} of {}) ", app.view.len(), app.dataset.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Loading / error / empty states come before any table chrome
    if !app.dataset_published {
        if let Some(err) = &app.data_error {
            let err = err.clone();
            render_error_state(
                frame,
                inner,
                "Could not load devices",
                &err,
                Some("Press [r] to retry"),
            );
        } else {
            render_empty_state(frame, inner, "Loading devices...", None);
        }
        app.table_area = Rect::default();
        app.row_anchor = None;
        return;
    }
    if app.view.is_empty() {
        render_empty_state(
            frame,
            inner,
            "No devices match the current filters",
            Some("Press [x] to clear filters"),
        );
        app.table_area = Rect::default();
        app.row_anchor = None;
        return;
    }

    // One header row, the rest is body
    let body_height = inner.height.saturating_sub(1) as usize;
    let offset = app.table.scroll_into_view(body_height);

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from(sort_header("Device", SortKey::Name, app)),
        Cell::from(sort_header("Brand", SortKey::Brand, app)),
        Cell::from(sort_header("Score", SortKey::Score, app)),
        Cell::from(sort_header("Guides", SortKey::TeardownCount, app)),
    ])
    .style(Styles::header());

    let rows: Vec<Row> = app
        .view
        .iter()
        .skip(offset)
        .take(body_height)
        .enumerate()
        .map(|(i, &idx)| {
            let device = &app.dataset[idx];
            let selected = offset + i == app.table.selected;
            device_row(device, app, selected)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(9),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths).header(header);
    frame.render_widget(table, inner);

    // Geometry for mouse hit-testing (body rows only) and the anchored
    // teardown dropdown, re-measured every frame so overlays track
    // scrolling and resizes
    let body = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));
    app.table_area = body;
    app.row_anchor = app
        .table
        .selected
        .checked_sub(offset)
        .filter(|&visible| visible < body_height)
        .map(|visible| Rect::new(body.x, body.y + visible as u16, body.width, 1));
}

fn sort_header(label: &str, key: SortKey, app: &App) -> String {
    if app.sort.key == key {
        format!("{label} {}", app.sort.direction.arrow())
    } else {
        label.to_string()
    }
}

fn device_row<'a>(device: &'a Device, app: &App, selected: bool) -> Row<'a> {
    let scheme = colors();

    let checkbox = if app.selection.contains(&device.key()) {
        Span::styled("[x]", Style::default().fg(scheme.accent))
    } else {
        Span::styled("[ ]", Style::default().fg(scheme.muted))
    };

    let mut name_spans = vec![Span::raw(truncate_str(&device.name, 32))];
    if device.link.is_some() {
        name_spans.push(Span::styled(" ↗", Style::default().fg(scheme.primary)));
    }

    let brand = Span::styled(
        truncate_str(device.brand.as_deref().unwrap_or("-"), 13),
        Style::default().fg(scheme.text_muted),
    );

    let score = score_badge(device);

    let guides = if device.teardown_urls.is_empty() {
        Span::styled("-", Style::default().fg(scheme.muted))
    } else {
        let badges: Vec<String> = badge_tags(&device.teardown_urls)
            .iter()
            .map(|t| t.badge().to_string())
            .collect();
        let text = if badges.is_empty() {
            format!("{}", device.teardown_count())
        } else {
            format!("{} {}", device.teardown_count(), badges.join(","))
        };
        Span::styled(truncate_str(&text, 17), Style::default().fg(scheme.text))
    };

    let row = Row::new(vec![
        Cell::from(checkbox),
        Cell::from(Line::from(name_spans)),
        Cell::from(brand),
        Cell::from(score),
        Cell::from(guides),
    ]);

    if selected {
        row.style(Styles::selected())
    } else {
        row
    }
}

/// Color-coded score badge: >=8 good, >=5 fair, else poor, absent unknown.
fn score_badge(device: &Device) -> Span<'static> {
    let scheme = colors();
    match device.repairability_score {
        Some(score) => Span::styled(
            format!(" {score:>4} "),
            Style::default()
                .fg(scheme.badge_fg)
                .bg(scheme.score_color(Some(score)))
                .bold(),
        ),
        None => Span::styled("   ?  ", Style::default().fg(scheme.score_unknown)),
    }
}
