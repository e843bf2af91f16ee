use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::pipeline::WeatherReport,
    ui::{
        format::{DETAIL_HOURS, hour_detail_line},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame, area: Rect, report: &WeatherReport, theme: Theme) {
    let lines = report
        .window
        .iter()
        .take(DETAIL_HOURS)
        .map(|hour| Line::from(hour_detail_line(hour)))
        .collect::<Vec<_>>();

    let body = if lines.is_empty() {
        Paragraph::new("No forecast data available").style(Style::default().fg(theme.muted_text))
    } else {
        Paragraph::new(lines).style(Style::default().fg(theme.text))
    };
    frame.render_widget(
        body.block(super::panel(" Detailed Hourly Forecast ", theme)),
        area,
    );
}
