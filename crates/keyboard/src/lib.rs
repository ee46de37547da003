//! Keyboard command handling for the editor.
//!
//! Key parsing is kept apart from command execution: a key event becomes an
//! [`EditorCommand`], and the command is then applied to a [`TextBuffer`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use finni_buffer::{BufferError, TextBuffer, NEWLINE};
use finni_config::EditorSettings;

/// Editor command representing a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    // Navigation
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,

    // Text editing
    InsertChar(char),
    InsertNewline,
    InsertTab,
    Backspace,

    // Application
    Save,
    Quit,

    /// No operation (for unhandled keys)
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    pub fn from_key_event(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Up, KeyModifiers::NONE) => Self::MoveCursorUp,
            (KeyCode::Down, KeyModifiers::NONE) => Self::MoveCursorDown,
            (KeyCode::Left, KeyModifiers::NONE) => Self::MoveCursorLeft,
            (KeyCode::Right, KeyModifiers::NONE) => Self::MoveCursorRight,

            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Self::Save,
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => Self::Quit,
            (KeyCode::Esc, _) => Self::Quit,

            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => Self::InsertChar(ch),
            (KeyCode::Enter, KeyModifiers::NONE) => Self::InsertNewline,
            (KeyCode::Tab, KeyModifiers::NONE) => Self::InsertTab,
            (KeyCode::Backspace, KeyModifiers::NONE) => Self::Backspace,

            _ => Self::None,
        }
    }

    /// Whether the command is carried out by the buffer itself
    pub fn is_buffer_command(&self) -> bool {
        !matches!(self, Self::Save | Self::Quit | Self::None)
    }

    /// Apply the command to the buffer.
    ///
    /// Returns `Ok(true)` when the content changed. Commands that are not
    /// buffer operations succeed without touching the buffer.
    pub fn apply(
        &self,
        buffer: &mut TextBuffer,
        settings: &EditorSettings,
    ) -> Result<bool, BufferError> {
        match self {
            Self::MoveCursorUp => buffer.move_cursor_up().map(|_| false),
            Self::MoveCursorDown => buffer.move_cursor_down().map(|_| false),
            Self::MoveCursorLeft => buffer.move_cursor_left().map(|_| false),
            Self::MoveCursorRight => buffer.move_cursor_right().map(|_| false),
            Self::InsertChar(ch) => {
                let mut utf8 = [0u8; 4];
                buffer.insert_bytes(ch.encode_utf8(&mut utf8).as_bytes());
                Ok(true)
            }
            Self::InsertNewline => {
                buffer.insert(NEWLINE);
                Ok(true)
            }
            Self::InsertTab => {
                buffer.insert_bytes(&settings.tab_bytes());
                Ok(true)
            }
            Self::Backspace => buffer.delete().map(|_| true),
            Self::Save | Self::Quit | Self::None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Up, KeyModifiers::NONE)),
            EditorCommand::MoveCursorUp
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Down, KeyModifiers::NONE)),
            EditorCommand::MoveCursorDown
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Left, KeyModifiers::NONE)),
            EditorCommand::MoveCursorLeft
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Right, KeyModifiers::NONE)),
            EditorCommand::MoveCursorRight
        );
    }

    #[test]
    fn test_text_and_control_keys() {
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            EditorCommand::InsertChar('A')
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            EditorCommand::Save
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            EditorCommand::Quit
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            EditorCommand::Quit
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            EditorCommand::None
        );
        assert_eq!(
            EditorCommand::from_key_event(key(KeyCode::F(5), KeyModifiers::NONE)),
            EditorCommand::None
        );
    }

    #[test]
    fn test_apply_inserts_utf8_bytes() {
        let mut buffer = TextBuffer::new();
        let settings = EditorSettings::default();

        assert_eq!(EditorCommand::InsertChar('ö').apply(&mut buffer, &settings), Ok(true));
        assert_eq!(buffer.content(), "ö".as_bytes());
        assert_eq!(buffer.cursor(), 2);

        EditorCommand::InsertNewline.apply(&mut buffer, &settings).unwrap();
        assert_eq!(buffer.content(), "ö\n".as_bytes());
    }

    #[test]
    fn test_apply_tab_follows_settings() {
        let mut buffer = TextBuffer::new();
        let mut settings = EditorSettings::default();

        EditorCommand::InsertTab.apply(&mut buffer, &settings).unwrap();
        assert_eq!(buffer.content(), b"\t");

        settings.insert_spaces = true;
        settings.tab_size = 3;
        EditorCommand::InsertTab.apply(&mut buffer, &settings).unwrap();
        assert_eq!(buffer.content(), b"\t   ");
        assert_eq!(buffer.cursor(), 4);
    }

    #[test]
    fn test_apply_reports_buffer_errors() {
        let mut buffer = TextBuffer::from_bytes("t\ntest", 4).unwrap();
        let settings = EditorSettings::default();

        assert_eq!(
            EditorCommand::MoveCursorUp.apply(&mut buffer, &settings),
            Err(BufferError::CannotMoveUp)
        );
        assert_eq!(buffer.cursor(), 4);

        assert_eq!(
            EditorCommand::Backspace.apply(&mut buffer, &settings),
            Ok(true)
        );
        assert_eq!(buffer.content(), b"t\ntst");

        assert_eq!(
            EditorCommand::MoveCursorRight.apply(&mut buffer, &settings),
            Ok(false)
        );
    }

    #[test]
    fn test_non_buffer_commands_are_noops() {
        let mut buffer = TextBuffer::from_bytes_at_end("hello");
        let settings = EditorSettings::default();

        for command in [EditorCommand::Save, EditorCommand::Quit, EditorCommand::None] {
            assert!(!command.is_buffer_command());
            assert_eq!(command.apply(&mut buffer, &settings), Ok(false));
        }
        assert_eq!(buffer, TextBuffer::from_bytes_at_end("hello"));
        assert!(EditorCommand::Backspace.is_buffer_command());
    }
}
