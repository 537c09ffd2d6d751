//! Keystroke policy for the access panel

use super::region::TextRegion;
use tracing::debug;

/// Receives each line submitted with Enter
pub type InputHandler = Box<dyn FnMut(String) + Send>;

/// Key pressed in the panel, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Other,
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// No Ctrl or Alt; Shift alone still produces ordinary text
    pub fn is_typing(self) -> bool {
        !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// What the panel did with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The pending input was submitted to the input handler
    Submitted(String),
    /// The key was swallowed to protect the history region
    Suppressed,
    /// Default editing was applied (possibly as a no-op at a boundary)
    Handled,
    /// The panel has no use for this key
    Unhandled,
}

/// Text panel mixing output history and an input line in one buffer.
///
/// Lines submitted with Enter go to the handler given at construction.
pub struct AccessPanel {
    region: TextRegion,
    on_input: InputHandler,
}

impl AccessPanel {
    pub fn new(on_input: impl FnMut(String) + Send + 'static) -> Self {
        Self::with_region(TextRegion::new(), on_input)
    }

    pub fn with_region(region: TextRegion, on_input: impl FnMut(String) + Send + 'static) -> Self {
        Self {
            region,
            on_input: Box::new(on_input),
        }
    }

    pub fn region(&self) -> &TextRegion {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut TextRegion {
        &mut self.region
    }

    /// Display a message above the line being typed
    pub fn send(&mut self, message: &str) -> usize {
        self.region.append_message(message)
    }

    pub fn pending_input(&self) -> &str {
        self.region.pending_input()
    }

    /// Apply the keystroke policy, then default editing
    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        let KeyPress { key, modifiers } = press;

        if key == Key::Enter && modifiers.is_none() {
            let line = self.region.submit_and_clear();
            debug!(chars = line.chars().count(), "Input submitted");
            (self.on_input)(line.clone());
            return KeyOutcome::Submitted(line);
        }

        if matches!(key, Key::Char(c) if !c.is_control())
            && modifiers.is_typing()
            && self.region.caret_in_history()
        {
            self.region.move_to_end();
        }

        if key == Key::Backspace && modifiers.is_none() {
            // The caret is always within the buffer, so the check cannot fail.
            let blocked = self
                .region
                .is_editing_at(self.region.caret(), true)
                .unwrap_or(true);
            if blocked {
                return KeyOutcome::Suppressed;
            }
        }

        self.default_handling(key, modifiers)
    }

    fn default_handling(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if !modifiers.is_typing() {
            return KeyOutcome::Unhandled;
        }

        let region = &mut self.region;
        match key {
            Key::Char(c) if !c.is_control() => {
                region.insert_char(c);
            }
            Key::Enter => {
                region.insert_char('\n');
            }
            Key::Backspace => {
                region.delete_backward();
            }
            Key::Delete => {
                region.delete_forward();
            }
            Key::Left => {
                region.move_left();
            }
            Key::Right => {
                region.move_right();
            }
            Key::Up => {
                region.move_up();
            }
            Key::Down => {
                region.move_down();
            }
            Key::Home => region.move_home(),
            Key::End => region.move_end(),
            Key::Char(_) | Key::Tab | Key::Other => return KeyOutcome::Unhandled,
        }
        KeyOutcome::Handled
    }
}

impl std::fmt::Debug for AccessPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessPanel")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}
