use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use crate::{
    app::pipeline::WeatherReport,
    ui::{format::chart_points, theme::Theme},
};

const TITLE: &str = " 24-Hour Temperature Forecast ";

pub fn render(frame: &mut Frame, area: Rect, report: &WeatherReport, theme: Theme) {
    let block = super::panel(TITLE, theme);
    if report.window.is_empty() {
        frame.render_widget(placeholder("No forecast data available", theme).block(block), area);
        return;
    }
    let points = chart_points(&report.window);
    if points.is_empty() {
        frame.render_widget(
            placeholder("No temperature data available for chart", theme).block(block),
            area,
        );
        return;
    }

    let data = points
        .iter()
        .enumerate()
        .map(|(idx, (_, temp))| (idx as f64, f64::from(*temp)))
        .collect::<Vec<_>>();
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, t)| {
            (lo.min(*t), hi.max(*t))
        });
    let x_max = (data.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .name("Temperature (°C)")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(&data);

    let axis_style = Style::default().fg(theme.muted_text);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(tick_labels(&points)),
        )
        .y_axis(
            Axis::default()
                .title("°C")
                .style(axis_style)
                .bounds([min.floor() - 1.0, max.ceil() + 1.0])
                .labels([format!("{:.0}", min.floor() - 1.0), format!("{:.0}", max.ceil() + 1.0)]),
        );
    frame.render_widget(chart, area);
}

/// First, middle and last hour labels of the plotted series.
fn tick_labels(points: &[(String, f32)]) -> Vec<String> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![points[0].0.clone()],
        2 => vec![points[0].0.clone(), points[1].0.clone()],
        len => vec![
            points[0].0.clone(),
            points[len / 2].0.clone(),
            points[len - 1].0.clone(),
        ],
    }
}

fn placeholder(message: &'static str, theme: Theme) -> Paragraph<'static> {
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted_text))
}

#[cfg(test)]
mod tests {
    use super::tick_labels;

    #[test]
    fn ticks_mark_start_middle_and_end() {
        let points = (0..24)
            .map(|h| (format!("{h:02}:00"), h as f32))
            .collect::<Vec<_>>();
        assert_eq!(tick_labels(&points), vec!["00:00", "12:00", "23:00"]);
        assert_eq!(tick_labels(&points[..1]), vec!["00:00"]);
        assert!(tick_labels(&[]).is_empty());
    }
}
