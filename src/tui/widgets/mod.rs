//! Shared widgets and layout helpers for the TUI.

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Compute the rect for an overlay anchored to a trigger element.
///
/// The panel opens below the anchor, left-aligned with it, clamped to the
/// bounds horizontally. When there is not enough room below, it flips
/// above the anchor; if neither side fits the height is clamped to the
/// larger side.
#[must_use]
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let mut x = anchor.x.max(bounds.x);
    if x + width > bounds.right() {
        x = bounds.right().saturating_sub(width).max(bounds.x);
    }

    let below_top = anchor.bottom();
    let space_below = bounds.bottom().saturating_sub(below_top);
    let space_above = anchor.y.saturating_sub(bounds.y);

    if height <= space_below {
        // Preferred placement: below the anchor
        Rect::new(x, below_top, width, height)
    } else if height <= space_above {
        // Flip above
        Rect::new(x, anchor.y - height, width, height)
    } else if space_below >= space_above {
        Rect::new(x, below_top, width, space_below)
    } else {
        Rect::new(x, bounds.y, width, space_above)
    }
}

/// Helper function to create a centered rectangle.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width.
#[must_use]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    let display_width = UnicodeWidthStr::width(s);
    if display_width <= max_width {
        return s.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > keep {
                return false;
            }
            width += w;
            true
        })
        .collect();
    format!("{truncated}...")
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];
    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render an error state with a message and optional action hint.
pub fn render_error_state(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    action_hint: Option<&str>,
) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(scheme.error).bold()),
            Span::styled(title.to_string(), Style::default().fg(scheme.error).bold()),
        ]),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text)),
    ];
    if let Some(hint) = action_hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            hint.to_string(),
            Style::default().fg(scheme.text_muted),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.error)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a bordered popup at the given rect, clearing what's beneath.
pub fn render_popup_at(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    border_color: Color,
) {
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(colors().background_alt)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(popup, area);
}

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 20;

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(scheme.warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
                Style::default().fg(scheme.accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
