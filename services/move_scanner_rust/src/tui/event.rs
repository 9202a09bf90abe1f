//! Keyboard input mapping for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Refetch the odds page, bypassing the cache
    Refresh,
    /// Switch between the full view and the totals-only view
    ToggleTotals,
    ScrollUp,
    ScrollDown,
    SpreadDown,
    SpreadUp,
    TotalDown,
    TotalUp,
    MoneylineDown,
    MoneylineUp,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('r') => KeyAction::Refresh,
            KeyCode::Char('t') => KeyAction::ToggleTotals,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
            KeyCode::Char('[') => KeyAction::SpreadDown,
            KeyCode::Char(']') => KeyAction::SpreadUp,
            KeyCode::Char('-') => KeyAction::TotalDown,
            KeyCode::Char('=') | KeyCode::Char('+') => KeyAction::TotalUp,
            KeyCode::Char(',') => KeyAction::MoneylineDown,
            KeyCode::Char('.') => KeyAction::MoneylineUp,
            _ => KeyAction::None,
        }
    }
}
