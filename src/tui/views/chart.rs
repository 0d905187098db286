//! Score distribution histogram.

use crate::tui::app::App;
use crate::tui::theme::colors;
use crate::tui::widgets::render_error_state;
use crate::view::score_buckets;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

/// Render the 11-bucket score histogram for the current view.
///
/// The chart degrades independently: a dataset load failure shows an
/// error panel here while the (cached) table keeps working.
pub(crate) fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let scheme = colors();

    let block = Block::default()
        .title(" Score distribution ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.dataset_published {
        if let Some(err) = &app.data_error {
            render_error_state(frame, inner, "Chart unavailable", err, None);
        }
        return;
    }

    let buckets = score_buckets(app.view_devices());

    let bars: Vec<Bar> = buckets
        .iter()
        .enumerate()
        .map(|(score, &count)| {
            #[allow(clippy::cast_precision_loss)]
            let color = scheme.score_color(Some(score as f64));
            Bar::default()
                .value(count)
                .label(Line::from(score.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(scheme.badge_fg).bg(color))
        })
        .collect();

    let bar_width = (inner.width.saturating_sub(1) / 11).clamp(1, 5);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, inner);
}
