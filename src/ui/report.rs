use std::fmt::Write as _;

use super::format::{
    DETAIL_HOURS, chart_points, hour_detail_line, metric_temp, metric_wind, prediction_text,
    sparkline, twin_line,
};
use crate::{app::pipeline::WeatherReport, cli::IconMode, domain::weather::category_icon};

/// Renders the one-shot plain-text report.
#[must_use]
pub fn render_report(report: &WeatherReport, icons: IconMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Weather Predictor");
    let _ = match &report.timezone {
        Some(tz) => writeln!(out, "Location: {} ({tz})", report.location.label),
        None => writeln!(out, "Location: {}", report.location.label),
    };

    let _ = writeln!(out, "\nCurrent Weather");
    let _ = writeln!(out, "  Temperature: {}", metric_temp(report.current.temperature_c));
    let _ = writeln!(
        out,
        "  Feels Like:  {}",
        metric_temp(report.current.apparent_temperature_c)
    );
    let _ = writeln!(out, "  Wind Speed:  {}", metric_wind(report.current.wind_speed_kmh));
    let _ = writeln!(
        out,
        "  Conditions:  {} {}",
        category_icon(report.classification.category, icons),
        report.classification.description
    );
    let _ = writeln!(out, "  Tip:         {}", report.classification.tip);

    let _ = writeln!(out, "\n24-Hour Temperature Forecast");
    write_chart(&mut out, report);

    let _ = writeln!(out, "\nPrediction");
    let _ = writeln!(out, "  {}", prediction_text(report.trend.as_ref()));

    if !report.window.is_empty() {
        let _ = writeln!(out, "\nDetailed Hourly Forecast");
        for hour in report.window.iter().take(DETAIL_HOURS) {
            let _ = writeln!(out, "  {}", hour_detail_line(hour));
        }
    }

    let _ = writeln!(out, "\nJust for Fun");
    if let Some(joke) = &report.extras.joke {
        let _ = writeln!(out, "  Joke: {joke}");
    }
    let _ = writeln!(out, "  Mood: {}", report.extras.mood);
    if let Some(twin) = &report.extras.twin {
        let _ = writeln!(out, "  Weather twin: {}", twin_line(twin));
    }

    if let Some(footer) = &report.extras.footer {
        let _ = writeln!(out, "\n{footer}");
    }
    out
}

fn write_chart(out: &mut String, report: &WeatherReport) {
    if report.window.is_empty() {
        let _ = writeln!(out, "  No forecast data available");
        return;
    }
    let points = chart_points(&report.window);
    if points.is_empty() {
        let _ = writeln!(out, "  No temperature data available for chart");
        return;
    }

    let temps = points.iter().map(|(_, t)| *t).collect::<Vec<_>>();
    let _ = writeln!(out, "  {}", sparkline(&temps));

    let (min_label, min) = extreme(&points, |a, b| a < b);
    let (max_label, max) = extreme(&points, |a, b| a > b);
    let _ = writeln!(
        out,
        "  Low {min:.1} °C at {min_label}, high {max:.1} °C at {max_label}"
    );
}

/// First point that wins `better` against every other; `points` is non-empty.
fn extreme(points: &[(String, f32)], better: impl Fn(f32, f32) -> bool) -> (&str, f32) {
    let mut best = (points[0].0.as_str(), points[0].1);
    for (label, temp) in &points[1..] {
        if better(*temp, best.1) {
            best = (label.as_str(), *temp);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn report_lists_every_section() {
        let text = render_report(&sample_report(), IconMode::Ascii);

        assert!(text.contains("Location: London, England, United Kingdom (Europe/London)"));
        assert!(text.contains("Temperature: 12.3 °C"));
        assert!(text.contains("Feels Like:  10.1 °C"));
        assert!(text.contains("Wind Speed:  14.0 km/h"));
        assert!(text.contains("Conditions:  PCL Partly cloudy"));
        assert!(text.contains("Low 10.0 °C at 10:00, high 21.5 °C at 09:00"));
        assert!(text.contains("Temperatures will be warming up"));
        assert!(text.contains("Rain is likely in the next 24 hours."));
        assert!(text.contains("Weather twin: Amsterdam, Netherlands"));
        assert!(text.ends_with("Data provided by Open-Meteo.com. No API key required.\n"));
    }

    #[test]
    fn report_header_snapshot() {
        let text = render_report(&sample_report(), IconMode::Ascii);
        let header = text.lines().take(2).collect::<Vec<_>>().join(" / ");
        insta::assert_snapshot!(
            header,
            @"Weather Predictor / Location: London, England, United Kingdom (Europe/London)"
        );
    }

    #[test]
    fn detail_section_stops_after_twelve_hours() {
        let text = render_report(&sample_report(), IconMode::Ascii);
        let detail_lines = text.lines().filter(|l| l.contains(" | Temp: ")).count();
        assert_eq!(detail_lines, 12);
    }

    #[test]
    fn empty_window_reports_missing_forecast() {
        let mut report = sample_report();
        report.window.clear();
        report.trend = None;

        let text = render_report(&report, IconMode::Ascii);
        assert!(text.contains("No forecast data available"));
        assert!(text.contains("Insufficient data for prediction"));
        assert!(!text.contains("Detailed Hourly Forecast"));
    }

    #[test]
    fn window_without_temperatures_has_no_chart() {
        let mut report = sample_report();
        for hour in &mut report.window {
            hour.temperature_c = None;
        }

        let text = render_report(&report, IconMode::Ascii);
        assert!(text.contains("No temperature data available for chart"));
    }
}
