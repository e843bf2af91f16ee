pub mod chart;
pub mod current;
pub mod extras;
pub mod hourly;
pub mod prediction;
pub mod search;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent))
}
