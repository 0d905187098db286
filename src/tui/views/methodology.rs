//! Methodology (rubric) tab.
//!
//! Driven by the independently loaded rubric document: a criteria-by-
//! version matrix on the left, version list on the right, with a detail
//! dialog per version. A failed rubric load degrades this tab only.

use crate::data::LoadState;
use crate::tui::app::App;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_empty_state, render_error_state, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

pub(crate) fn render_methodology(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();

    match &app.rubric {
        LoadState::Unloaded | LoadState::Loading => {
            render_empty_state(frame, area, "Loading scoring methodology...", None);
        }
        LoadState::Failed(reason) => {
            let reason = reason.clone();
            render_error_state(
                frame,
                area,
                "Methodology unavailable",
                &reason,
                Some("Press [r] to retry - the device table is unaffected"),
            );
        }
        LoadState::Ready(rubric) => {
            let rubric = rubric.clone();
            let layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(24)])
                .split(area);

            // Criteria x versions matrix
            let block = Block::default()
                .title(" Scoring criteria ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border));
            let inner = block.inner(layout[0]);
            frame.render_widget(block, layout[0]);

            let header = Row::new(
                std::iter::once(Cell::from("Criterion"))
                    .chain(rubric.versions.iter().map(|v| Cell::from(v.clone())))
                    .collect::<Vec<_>>(),
            )
            .style(Styles::header());

            let rows: Vec<Row> = rubric
                .criteria
                .iter()
                .map(|criterion| {
                    Row::new(
                        std::iter::once(Cell::from(truncate_str(&criterion.name, 30)))
                            .chain(rubric.versions.iter().enumerate().map(|(i, version)| {
                                if criterion.included.get(i).copied().unwrap_or(false) {
                                    let weight = criterion
                                        .weights
                                        .get(version)
                                        .map_or_else(|| "✓".to_string(), |w| format!("{w}"));
                                    Cell::from(weight)
                                        .style(Style::default().fg(scheme.success))
                                } else {
                                    Cell::from("-").style(Style::default().fg(scheme.muted))
                                }
                            }))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect();

            let mut widths = vec![Constraint::Min(24)];
            widths.extend(rubric.versions.iter().map(|_| Constraint::Length(8)));
            frame.render_widget(Table::new(rows, widths).header(header), inner);

            // Version list
            let block = Block::default()
                .title(" Versions ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused));
            let list_inner = block.inner(layout[1]);
            frame.render_widget(block, layout[1]);

            let items: Vec<ListItem> = rubric
                .versions
                .iter()
                .enumerate()
                .map(|(i, version)| {
                    let item = ListItem::new(format!("v{version}"));
                    if i == app.rubric_versions.selected {
                        item.style(Styles::selected())
                    } else {
                        item
                    }
                })
                .collect();

            let layout_right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(list_inner);
            frame.render_widget(List::new(items), layout_right[0]);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("[Enter]", Style::default().fg(scheme.accent)),
                    Span::styled(" details", Style::default().fg(scheme.text_muted)),
                ])),
                layout_right[1],
            );
        }
    }
}
