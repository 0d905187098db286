//! Side-by-side comparison drawer.

use crate::model::Device;
use crate::tui::app::App;
use crate::tui::theme::colors;
use crate::tui::widgets::{centered_rect, truncate_str};
use crate::view::badge_tags;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

/// Render the comparison overlay for the resolved selection.
///
/// Selection keys resolve against the full dataset, so devices hidden by
/// the current filters still appear. At most five columns.
pub(crate) fn render_compare(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let devices = app.selection.resolve(&app.dataset);
    if devices.len() < 2 {
        return;
    }

    let overlay_area = centered_rect(80, 70, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(format!(" Compare ({} devices) ", devices.len()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.accent))
        .style(Style::default().bg(scheme.background_alt));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(devices.iter().map(|d| {
                Cell::from(truncate_str(&d.name, 18)).style(
                    Style::default()
                        .fg(scheme.primary)
                        .add_modifier(Modifier::BOLD),
                )
            }))
            .collect::<Vec<_>>(),
    );

    let rows = vec![
        attribute_row("Brand", &devices, |d| {
            d.brand.clone().unwrap_or_else(|| "-".to_string())
        }),
        attribute_row("Score", &devices, |d| {
            d.repairability_score
                .map_or_else(|| "unscored".to_string(), |s| format!("{s}/10"))
        }),
        attribute_row("Rubric", &devices, |d| {
            d.scorecard_version
                .clone()
                .unwrap_or_else(|| "-".to_string())
        }),
        attribute_row("Guides", &devices, |d| d.teardown_count().to_string()),
        attribute_row("Tags", &devices, |d| {
            let tags = badge_tags(&d.teardown_urls);
            if tags.is_empty() {
                "-".to_string()
            } else {
                tags.iter()
                    .map(|t| t.as_str().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }),
        attribute_row("Link", &devices, |d| {
            d.link
                .as_deref()
                .map_or_else(|| "-".to_string(), |l| truncate_str(l, 18))
        }),
    ];

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(std::iter::repeat(Constraint::Min(12)).take(devices.len()));

    let table = Table::new(rows, widths).header(header);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(table, layout[0]);

    let hints = Line::from(vec![
        Span::styled("[Esc]", Style::default().fg(scheme.accent)),
        Span::styled(" close  ", Style::default().fg(scheme.text_muted)),
        Span::styled("[C]", Style::default().fg(scheme.accent)),
        Span::styled(" clear selection", Style::default().fg(scheme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), layout[1]);

    app.overlay_rect = Some(overlay_area);
}

fn attribute_row<'a>(
    label: &'a str,
    devices: &[&Device],
    value: impl Fn(&Device) -> String,
) -> Row<'a> {
    let scheme = colors();
    Row::new(
        std::iter::once(Cell::from(
            Span::styled(label, Style::default().fg(scheme.text_muted)),
        ))
        .chain(devices.iter().map(|d| Cell::from(value(d))))
        .collect::<Vec<_>>(),
    )
}
