use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::pipeline::WeatherReport,
    domain::trend::{TrendDirection, TrendPrediction},
    ui::{format::prediction_text, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, report: &WeatherReport, theme: Theme) {
    let color = match report.trend.as_ref().and_then(TrendPrediction::summary) {
        Some(summary) => match summary.direction {
            TrendDirection::WarmingUp => theme.warning,
            TrendDirection::CoolingDown => theme.info,
            TrendDirection::Stable => theme.text,
        },
        None => theme.muted_text,
    };

    let paragraph = Paragraph::new(prediction_text(report.trend.as_ref()))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(super::panel(" Prediction ", theme));
    frame.render_widget(paragraph, area);
}
