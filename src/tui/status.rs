use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::face::schedule::Cadence;
use crate::face::time::TimeSample;
use crate::tui::theme::Theme;

/// `hh:mm:ss` on a 12-hour dial, showing 12 rather than 0.
pub fn format_sample(sample: &TimeSample) -> String {
    let hour = if sample.hour == 0 { 12 } else { sample.hour };
    format!("{:02}:{:02}:{:02}", hour, sample.minute, sample.second)
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, sample: Option<&TimeSample>, cadence: Cadence) {
    let version = env!("CARGO_PKG_VERSION");
    let left_text = match sample {
        Some(sample) => format!(" clockface v{} | {}", version, format_sample(sample)),
        None => format!(" clockface v{}", version),
    };
    let right_text = format!("redraw: {} ", cadence.label());

    let left = Span::styled(left_text.clone(), Theme::status_bar());
    let right = Span::styled(right_text.clone(), Theme::status_bar());

    let width = area.width as usize;
    let padding = width.saturating_sub(left_text.len() + right_text.len());

    let line = Line::from(vec![
        left,
        Span::styled(" ".repeat(padding), Theme::status_bar()),
        right,
    ]);

    frame.render_widget(line, area);
}
