//! Key and event translation.
//!
//! Raw crossterm events become [`InputAction`]s; anything unbound is
//! swallowed here so the runtime loop never sees it.

use core_view::ScrollDirection;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Redraw,
    ToggleAutoRefresh,
    Scroll(ScrollDirection),
}

pub fn translate(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) if *kind != KeyEventKind::Release => match code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(InputAction::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::Redraw),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::ToggleAutoRefresh),
            KeyCode::Up | KeyCode::Left => Some(InputAction::Scroll(ScrollDirection::Up)),
            KeyCode::Down | KeyCode::Right => Some(InputAction::Scroll(ScrollDirection::Down)),
            KeyCode::PageUp => Some(InputAction::Scroll(ScrollDirection::PageUp)),
            KeyCode::PageDown => Some(InputAction::Scroll(ScrollDirection::PageDown)),
            _ => None,
        },
        // A resize invalidates the whole frame; redraw at the new size.
        Event::Resize(_, _) => Some(InputAction::Redraw),
        _ => None,
    }
}
