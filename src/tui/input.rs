//! Input handling for the picker.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Handle a terminal event.
///
/// Returns `Ok(true)` if the picker should end, `Ok(false)` to continue.
pub fn handle_event(app: &mut App, event: Event) -> Result<bool> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(handle_key(app, key)),
        _ => Ok(false),
    }
}

/// Handle a key event.
///
/// - ↑/Ctrl+P: move up
/// - ↓/Ctrl+N: move down
/// - Enter: select highlighted script
/// - Esc: clear the filter, or cancel if it is already empty
/// - Ctrl+C: cancel
/// - Backspace: edit the filter
/// - any printable character: extend the filter
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.cancel(),
            KeyCode::Char('p') => app.move_up(),
            KeyCode::Char('n') => app.move_down(),
            _ => {}
        }
        return app.should_quit();
    }

    match key.code {
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Esc => {
            if app.query().is_empty() {
                app.cancel();
            } else {
                app.clear_query();
            }
        }
        KeyCode::Char(c) => app.push_query_char(c),
        _ => {}
    }

    app.should_quit()
}
