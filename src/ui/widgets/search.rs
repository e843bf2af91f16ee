use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::theme::Theme};

const PLACEHOLDER: &str = "e.g., London, New York, Tokyo";
const HINTS: &str = " Enter search · F2 my location · Tab details · Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = super::panel(" Weather Predictor ", theme)
        .title_bottom(Line::from(Span::styled(HINTS, Style::default().fg(theme.muted_text))));

    let query = if state.query.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_text))
    } else {
        Span::styled(state.query.clone(), Style::default().fg(theme.text))
    };
    let line = Line::from(vec![
        Span::styled(
            "City: ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        query,
        Span::styled("▏", Style::default().fg(theme.accent)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_notice(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(notice) = &state.notice else {
        return;
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.text),
        Style::default()
            .fg(theme.notice(notice.level))
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
