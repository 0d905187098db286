//! Transient overlay rendering.
//!
//! Rendered after everything else so they sit on top of the frame. Each
//! overlay records its rect in the app for outside-click dismissal, and
//! anchored overlays recompute their position from the current frame's
//! trigger rects, so they track scrolling and terminal resizes for free.

use super::render_compare;
use crate::data::LoadState;
use crate::model::Rubric;
use crate::tui::app::{App, EXPORT_FORMATS};
use crate::tui::constants::DROPDOWN_WIDTH;
use crate::tui::theme::colors;
use crate::tui::viewmodel::OverlayKind;
use crate::tui::widgets::{anchored_rect, centered_rect, render_popup_at, truncate_str};
use crate::view::ordered_teardowns;
use ratatui::prelude::*;

/// Render the active overlay, if any.
pub(crate) fn render_overlays(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.overlay.current() {
        Some(OverlayKind::Teardowns) => render_teardown_dropdown(frame, app, area),
        Some(OverlayKind::ExportMenu) => render_export_menu(frame, app, area),
        Some(OverlayKind::Info) => render_info_tooltip(frame, app, area),
        Some(OverlayKind::Help) => render_help(frame, app, area),
        Some(OverlayKind::Compare) => render_compare(frame, app, area),
        Some(OverlayKind::RubricVersion) => render_rubric_version(frame, app, area),
        None => app.overlay_rect = None,
    }
}

/// Teardown guide dropdown, anchored to the selected table row.
fn render_teardown_dropdown(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let Some(device) = app.selected_device() else {
        app.close_overlay();
        return;
    };
    let Some(anchor) = app.row_anchor else {
        // Selected row scrolled out of the viewport; nothing to anchor to
        app.close_overlay();
        return;
    };

    let teardowns = ordered_teardowns(&device.teardown_urls);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, teardown) in teardowns.iter().enumerate() {
        let selected = i == app.overlay_menu.selected;
        let marker = if selected { "▶ " } else { "  " };
        let mut style = Style::default().fg(scheme.text);
        if teardown.is_archived() {
            style = Style::default().fg(scheme.text_muted);
        }
        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(scheme.accent)),
            Span::styled(truncate_str(&teardown.title, 34), style),
        ];
        if let Some(difficulty) = &teardown.difficulty {
            spans.push(Span::styled(
                format!(" ({difficulty})"),
                Style::default().fg(scheme.text_muted),
            ));
        }
        for tag in &teardown.tags {
            spans.push(Span::styled(
                format!(" [{}]", tag.badge()),
                Style::default().fg(scheme.accent),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] copy url  [Esc] close",
        Style::default().fg(scheme.text_muted),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let rect = anchored_rect(anchor, DROPDOWN_WIDTH, height, area);
    let title = format!("Teardowns - {}", truncate_str(&device.name, 30));
    render_popup_at(frame, rect, &title, lines, scheme.primary);
    app.overlay_rect = Some(rect);
}

/// Export format menu.
fn render_export_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let mut lines: Vec<Line<'static>> = vec![Line::from(Span::styled(
        format!("Export {} devices as:", app.view.len()),
        Style::default().fg(scheme.text_muted),
    ))];
    lines.push(Line::from(""));
    for (i, format) in EXPORT_FORMATS.iter().enumerate() {
        let selected = i == app.overlay_menu.selected;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(scheme.accent).bold()
        } else {
            Style::default().fg(scheme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(scheme.accent)),
            Span::styled(format.label().to_string(), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] export  [Esc] cancel",
        Style::default().fg(scheme.text_muted),
    )));

    let rect = centered_rect(40, 35, area);
    render_popup_at(frame, rect, "Export", lines, scheme.accent);
    app.overlay_rect = Some(rect);
}

/// Data freshness tooltip, anchored to the header info chip.
fn render_info_tooltip(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let mut lines: Vec<Line<'static>> = vec![Line::from(vec![
        Span::styled("Devices: ", Style::default().fg(scheme.text_muted)),
        Span::styled(app.dataset.len().to_string(), Style::default().fg(scheme.text)),
    ])];
    lines.push(Line::from(vec![
        Span::styled("Source: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            if app.loaded_from_cache { "local cache" } else { "network" }.to_string(),
            Style::default().fg(scheme.text),
        ),
    ]));
    let freshness = match &app.freshness {
        LoadState::Ready(Some(timestamp)) => {
            timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
        }
        LoadState::Ready(None) => "not reported".to_string(),
        LoadState::Loading => "checking...".to_string(),
        LoadState::Failed(_) => "unavailable".to_string(),
        LoadState::Unloaded => "unknown".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Updated: ", Style::default().fg(scheme.text_muted)),
        Span::styled(freshness, Style::default().fg(scheme.text)),
    ]));

    let rect = anchored_rect(app.info_anchor, 36, 5, area);
    render_popup_at(frame, rect, "Dataset", lines, scheme.primary);
    app.overlay_rect = Some(rect);
}

/// Keyboard shortcuts overlay.
fn render_help(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let entries: &[(&str, &str)] = &[
        ("/", "search devices"),
        ("n b s g", "sort by name / brand / score / guide count"),
        ("f F", "cycle brand filter"),
        ("[ ]", "step score filter"),
        ("u", "show or hide unscored devices"),
        ("x", "clear all filters"),
        ("Space", "select for comparison (max 5)"),
        ("c", "open comparison"),
        ("C", "clear comparison"),
        ("t / Enter", "teardown guides for the row"),
        ("e", "export menu"),
        ("i", "dataset info"),
        ("y", "copy shareable state string"),
        ("Y", "copy device link"),
        ("r", "refresh dataset"),
        ("Tab / m", "methodology tab"),
        ("T", "toggle theme"),
        ("q", "quit"),
    ];

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(entries.len());
    for (keys, action) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:>10}  "), Style::default().fg(scheme.accent)),
            Span::styled((*action).to_string(), Style::default().fg(scheme.text)),
        ]));
    }

    let rect = centered_rect(55, 75, area);
    render_popup_at(frame, rect, "Keyboard shortcuts", lines, scheme.primary);
    app.overlay_rect = Some(rect);
}

/// Per-version rubric detail dialog.
fn render_rubric_version(frame: &mut Frame, app: &mut App, area: Rect) {
    let scheme = colors();
    let Some(rubric) = app.rubric.ready().cloned() else {
        app.close_overlay();
        return;
    };
    let idx = app.rubric_versions.selected;
    let Some(version) = rubric.versions.get(idx).cloned() else {
        app.close_overlay();
        return;
    };

    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(section_header("Criteria"));
    for criterion in rubric.criteria_for(idx) {
        let weight = criterion
            .weights
            .get(&version)
            .map_or_else(String::new, |w| format!(" (weight {w})"));
        let mut spans = vec![
            Span::styled("  • ", Style::default().fg(scheme.accent)),
            Span::styled(criterion.name.clone(), Style::default().fg(scheme.text)),
            Span::styled(weight, Style::default().fg(scheme.text_muted)),
        ];
        if let Some(note) = criterion.notes.get(&version) {
            spans.push(Span::styled(
                format!(" - {}", truncate_str(note, 40)),
                Style::default().fg(scheme.text_muted),
            ));
        }
        lines.push(Line::from(spans));
    }

    let not_considered = Rubric::items_for(&rubric.factors_not_considered, &version);
    if !not_considered.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_header("Not considered"));
        for item in not_considered {
            lines.push(muted_bullet(item));
        }
    }

    let revisions = Rubric::items_for(&rubric.revisions, &version);
    if !revisions.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_header("Revisions"));
        for item in revisions {
            lines.push(muted_bullet(item));
        }
    }

    let rect = centered_rect(60, 70, area);
    render_popup_at(frame, rect, &format!("Rubric v{version}"), lines, scheme.accent);
    app.overlay_rect = Some(rect);
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(colors().primary).bold(),
    ))
}

fn muted_bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(colors().muted)),
        Span::styled(text.to_string(), Style::default().fg(colors().text_muted)),
    ])
}
