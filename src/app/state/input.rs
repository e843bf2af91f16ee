use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Quit,
    Search,
    UseMyLocation,
    ToggleDetails,
    Type(char),
    Backspace,
    ClearQuery,
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

pub(crate) fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(KeyCommand::Quit),
            KeyCode::Char('l' | 'L') => Some(KeyCommand::UseMyLocation),
            KeyCode::Char('u' | 'U') => Some(KeyCommand::ClearQuery),
            _ => None,
        };
    }
    if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Enter => Some(KeyCommand::Search),
        KeyCode::F(2) => Some(KeyCommand::UseMyLocation),
        KeyCode::Tab => Some(KeyCommand::ToggleDetails),
        KeyCode::Backspace => Some(KeyCommand::Backspace),
        KeyCode::Char(ch) if is_city_char(ch) => Some(KeyCommand::Type(ch)),
        _ => None,
    }
}
