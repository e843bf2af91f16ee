use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::pipeline::WeatherReport,
    ui::{format::twin_line, theme::Theme},
};

pub fn render(frame: &mut Frame, area: Rect, report: &WeatherReport, theme: Theme) {
    let label = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(theme.text);

    let mut lines = Vec::with_capacity(3);
    if let Some(joke) = &report.extras.joke {
        lines.push(Line::from(vec![
            Span::styled("Joke: ", label),
            Span::styled(joke.clone(), text),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Mood: ", label),
        Span::styled(report.extras.mood.clone(), text),
    ]));
    if let Some(twin) = &report.extras.twin {
        lines.push(Line::from(vec![
            Span::styled("Weather twin: ", label),
            Span::styled(twin_line(twin), text),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(super::panel(" Just for Fun ", theme)),
        area,
    );
}

pub fn render_footer(frame: &mut Frame, area: Rect, report: &WeatherReport, theme: Theme) {
    let Some(footer) = &report.extras.footer else {
        return;
    };
    frame.render_widget(
        Paragraph::new(footer.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted_text)),
        area,
    );
}
