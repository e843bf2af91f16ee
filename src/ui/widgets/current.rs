use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::pipeline::WeatherReport,
    cli::IconMode,
    domain::weather::category_icon,
    ui::{
        format::{metric_temp, metric_wind},
        theme::Theme,
    },
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    report: &WeatherReport,
    icons: IconMode,
    theme: Theme,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let label = Style::default().fg(theme.muted_text);
    let value = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let metrics = vec![
        Line::from(vec![
            Span::styled("Temperature  ", label),
            Span::styled(metric_temp(report.current.temperature_c), value),
        ]),
        Line::from(vec![
            Span::styled("Feels like   ", label),
            Span::styled(metric_temp(report.current.apparent_temperature_c), value),
        ]),
        Line::from(vec![
            Span::styled("Wind speed   ", label),
            Span::styled(metric_wind(report.current.wind_speed_kmh), value),
        ]),
    ];
    let title = format!(" {} ", report.location.label);
    let block = super::panel(" Current Weather ", theme).title_bottom(Line::from(Span::styled(
        title,
        Style::default().fg(theme.muted_text),
    )));
    frame.render_widget(Paragraph::new(metrics).block(block), left);

    let classification = &report.classification;
    let conditions = vec![
        Line::from(vec![
            Span::raw(format!("{} ", category_icon(classification.category, icons))),
            Span::styled(
                classification.description,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            classification.tip,
            Style::default().fg(theme.text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(conditions)
            .wrap(Wrap { trim: true })
            .block(super::panel(" Conditions ", theme)),
        right,
    );
}
