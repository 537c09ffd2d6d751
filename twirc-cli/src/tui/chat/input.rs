//! Chat input handling

use super::state::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twirc_core::{Key, KeyOutcome, KeyPress, Modifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Exit the client
    Exit,
    ScrollUp,
    ScrollDown,
    /// The key went to the panel
    Panel(KeyOutcome),
}

/// Handle a terminal event and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Paste(text) => {
            paste(state, &text);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Type pasted text into the panel; line breaks stay line breaks.
fn paste(state: &mut ChatState, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if !text.is_empty() && state.panel.region().caret_in_history() {
        state.panel.region_mut().move_to_end();
    }
    for c in text.chars() {
        let press = match c {
            '\n' => KeyPress::new(Key::Enter, Modifiers::SHIFT),
            c if c.is_control() => continue,
            c => KeyPress::plain(Key::Char(c)),
        };
        state.panel.handle_key(press);
    }
    state.follow_caret();
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return InputAction::Exit,
        KeyCode::PageUp => {
            state.scroll_up();
            return InputAction::ScrollUp;
        }
        KeyCode::PageDown => {
            state.scroll_down();
            return InputAction::ScrollDown;
        }
        KeyCode::Home if ctrl => {
            state.panel.region_mut().move_to_start();
            state.follow_caret();
            return InputAction::None;
        }
        KeyCode::End if ctrl => {
            state.panel.region_mut().move_to_end();
            state.follow_caret();
            return InputAction::None;
        }
        _ => {}
    }

    let outcome = state.panel.handle_key(to_key_press(&key));
    if outcome != KeyOutcome::Unhandled {
        state.follow_caret();
    }
    InputAction::Panel(outcome)
}

/// Translate a crossterm key event into a panel key press
pub fn to_key_press(key: &KeyEvent) -> KeyPress {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        _ => Key::Other,
    };
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    };
    KeyPress::new(code, modifiers)
}
