pub mod format;
pub mod report;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::{
        pipeline::WeatherReport,
        state::{AppMode, AppState},
    },
    ui::theme::{Theme, resolved_theme},
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 20;
const DETAIL_PANEL_HEIGHT: u16 = 14;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("weather-predictor"),
        );
        frame.render_widget(warning, area);
        return;
    }

    let theme = resolved_theme(state);
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    widgets::search::render(frame, chunks[0], state, theme);
    widgets::search::render_notice(frame, chunks[1], state, theme);

    match (state.mode, &state.report) {
        (AppMode::Loading, _) => render_message(frame, chunks[2], &state.loading_message, theme),
        (_, Some(report)) => render_report(frame, chunks[2], state, report, theme),
        (_, None) => render_message(
            frame,
            chunks[2],
            "Type a city and press Enter, or press F2 to use your location.",
            theme,
        ),
    }
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &WeatherReport,
    theme: Theme,
) {
    let mut constraints = vec![
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(4),
    ];
    if state.show_details {
        constraints.push(Constraint::Length(DETAIL_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(5));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(area);

    widgets::current::render(frame, chunks[0], report, state.icon_mode, theme);
    widgets::chart::render(frame, chunks[1], report, theme);
    widgets::prediction::render(frame, chunks[2], report, theme);
    let mut next = 3;
    if state.show_details {
        widgets::hourly::render(frame, chunks[next], report, theme);
        next += 1;
    }
    widgets::extras::render(frame, chunks[next], report, theme);
    widgets::extras::render_footer(frame, chunks[next + 1], report, theme);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted_text));
    frame.render_widget(paragraph, middle);
}
