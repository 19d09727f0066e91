use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dex_core::{AppViewModel, Msg, TabDirection};

/// What a key press means for the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    MoveCursor(isize),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel, cursor: usize) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') if ctrl => InputAction::Quit,
        KeyCode::Char('g') if ctrl => match view
            .selected
            .as_ref()
            .and_then(|selected| selected.species_url.clone())
        {
            Some(species_url) => InputAction::Dispatch(Msg::ElementTypeRequested { species_url }),
            None => InputAction::Ignore,
        },
        KeyCode::Char(_) if ctrl => InputAction::Ignore,
        KeyCode::Char(c) => {
            let mut term = view.search_term.clone();
            term.push(c);
            InputAction::Dispatch(Msg::SearchChanged(term))
        }
        KeyCode::Backspace => {
            let mut term = view.search_term.clone();
            if term.pop().is_none() {
                return InputAction::Ignore;
            }
            InputAction::Dispatch(Msg::SearchChanged(term))
        }
        KeyCode::Left | KeyCode::BackTab => {
            InputAction::Dispatch(Msg::TabNavigated(TabDirection::Previous))
        }
        KeyCode::Right | KeyCode::Tab => {
            InputAction::Dispatch(Msg::TabNavigated(TabDirection::Next))
        }
        KeyCode::Up => InputAction::MoveCursor(-1),
        KeyCode::Down => InputAction::MoveCursor(1),
        KeyCode::Enter => match view.active_rows().get(cursor) {
            Some(row) => InputAction::Dispatch(Msg::RecordSelected {
                record_index: row.record_index,
            }),
            None => InputAction::Ignore,
        },
        _ => InputAction::Ignore,
    }
}

/// Keeps the list cursor inside the active tab after any change.
pub fn clamp_cursor(cursor: usize, rows: usize) -> usize {
    cursor.min(rows.saturating_sub(1))
}
