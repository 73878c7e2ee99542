use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::app::App;

const PAGE: u16 = 10;

/// Returns false when the UI should close.
pub fn handle_event(app: &mut App, ev: Event) -> bool {
    match ev {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            // Single-line input; a pasted newline would otherwise split a command.
            app.draft.push_str(&text.replace(['\r', '\n'], " "));
            true
        }
        _ => true,
    }
}

fn handle_key(app: &mut App, KeyEvent { code, modifiers, .. }: KeyEvent) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if ctrl => return false,

        // Clear chat history
        KeyCode::Char('l') if ctrl => app.clear(),

        KeyCode::Enter => {
            app.submit();
            return !app.should_quit;
        }
        KeyCode::Backspace => { app.draft.pop(); }
        KeyCode::Char(c) => app.draft.push(c),

        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),

        _ => {}
    }
    true
}
