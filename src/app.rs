//! Main application.
//!
//! Owns the text buffer and turns key presses into buffer operations.

use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{backend::Backend, Terminal};

use finni_buffer::TextBuffer;
use finni_config::EditorSettings;
use finni_core::{Event, EventHandler};
use finni_keyboard::EditorCommand;

use crate::{document, ui};

/// Main application
pub struct App {
    buffer: TextBuffer,
    /// File the buffer is saved to (if any)
    file_path: Option<PathBuf>,
    settings: EditorSettings,
    /// Content differs from the last load or save
    modified: bool,
    /// Message for the status line
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create application around an existing buffer
    pub fn new(buffer: TextBuffer, file_path: Option<PathBuf>, settings: EditorSettings) -> Self {
        Self {
            buffer,
            file_path,
            settings,
            modified: false,
            status: None,
            should_quit: false,
        }
    }

    /// Open `path` (or an empty document) with the cursor at the end
    pub fn open(file_path: Option<PathBuf>, settings: EditorSettings) -> Result<Self> {
        let content = match &file_path {
            Some(path) => document::load(path)?,
            None => Vec::new(),
        };
        finni_logger::info(format!(
            "Opened {} ({} bytes)",
            document::title(file_path.as_deref()),
            content.len()
        ));
        Ok(Self::new(
            TextBuffer::from_bytes_at_end(content),
            file_path,
            settings,
        ))
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the event loop until quit is requested
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;
            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) | Event::Tick => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let command = EditorCommand::from_key_event(key);
        self.handle_command(&command);
    }

    /// Execute a command.
    ///
    /// Refused buffer operations are not errors for the application: they are
    /// logged and shown in the status line, and the buffer stays as it was.
    pub fn handle_command(&mut self, command: &EditorCommand) {
        if !command.is_buffer_command() {
            match command {
                EditorCommand::Save => self.save(),
                EditorCommand::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match command.apply(&mut self.buffer, &self.settings) {
            Ok(changed) => {
                self.modified |= changed;
                self.status = None;
            }
            Err(e) => {
                finni_logger::debug(format!("{:?} refused: {}", command, e));
                self.status = Some(e.to_string());
            }
        }
    }

    fn save(&mut self) {
        let Some(path) = self.file_path.as_deref() else {
            finni_logger::warn("Save requested for a buffer without a file path");
            self.status = Some("No file path set".to_string());
            return;
        };

        match document::save(path, self.buffer.content()) {
            Ok(()) => {
                finni_logger::info(format!(
                    "Saved {} bytes to {}",
                    self.buffer.len(),
                    path.display()
                ));
                self.modified = false;
                self.status = Some(format!("Saved {}", document::title(Some(path))));
            }
            Err(e) => {
                finni_logger::error(format!("Save failed: {:#}", e));
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }
}
