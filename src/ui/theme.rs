use ratatui::style::Color;

use crate::app::state::{AppState, NoticeLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

impl Theme {
    const COLOR: Self = Self {
        text: Color::White,
        muted_text: Color::Gray,
        accent: Color::LightCyan,
        border: Color::DarkGray,
        success: Color::LightGreen,
        warning: Color::Yellow,
        danger: Color::LightRed,
        info: Color::LightBlue,
    };

    const MONO: Self = Self {
        text: Color::Reset,
        muted_text: Color::Reset,
        accent: Color::Reset,
        border: Color::Reset,
        success: Color::Reset,
        warning: Color::Reset,
        danger: Color::Reset,
        info: Color::Reset,
    };

    #[must_use]
    pub fn notice(self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => self.success,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.danger,
        }
    }
}

#[must_use]
pub fn resolved_theme(state: &AppState) -> Theme {
    if state.color { Theme::COLOR } else { Theme::MONO }
}
