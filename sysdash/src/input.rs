//! Key bindings: maps raw key events to dashboard actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    ManualRefresh,
    NoOp,
}

pub fn route(key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Action::NoOp;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::NextTab,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::PrevTab,
        KeyCode::Char('r') => Action::ManualRefresh,
        _ => Action::NoOp,
    }
}
