//! Key bindings: crossterm key presses to [`AppEvent`]s.

use benefits_state::{AppEvent, AppState, Focus, Overlay};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press given the current focus. `None` means unbound.
pub fn map_key(app: &AppState, key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(AppEvent::Quit),
            _ => None,
        };
    }

    if !app.session().is_logged_in() {
        return match key.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(AppEvent::NextLoginField)
            }
            KeyCode::Enter => Some(AppEvent::SubmitLogin),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(c) => Some(AppEvent::TypeChar(c)),
            _ => None,
        };
    }

    if app.overlay() != &Overlay::None {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(AppEvent::CloseOverlay),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(AppEvent::ToggleRenewals),
            _ => None,
        };
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(AppEvent::LeaveSearch),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Up => Some(AppEvent::SelectPrevious),
            KeyCode::Down => Some(AppEvent::SelectNext),
            KeyCode::Char(c) => Some(AppEvent::TypeChar(c)),
            _ => None,
        },
        Focus::Table => match key.code {
            KeyCode::Char('/') | KeyCode::Tab => Some(AppEvent::FocusSearch),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SelectNext),
            KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('H') => Some(AppEvent::OpenHistory),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(AppEvent::ToggleRenewals),
            KeyCode::Char('o') | KeyCode::Char('O') => Some(AppEvent::SignOut),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        },
    }
}
