//! Event types for finni.
//!
//! This module provides:
//! - `Event` - Application-level events (keyboard, resize, tick)
//! - `EventHandler` - Polling for terminal events

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Nothing arrived within the tick rate
    Tick,
}

impl Event {
    /// Translate a raw crossterm event.
    ///
    /// Only key presses are forwarded; release and repeat events reported by
    /// the kitty keyboard protocol would otherwise duplicate input.
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        }
    }
}

/// Event handler for polling terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for next event
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Event::from_crossterm(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_only_presses_are_forwarded() {
        let press = key(KeyEventKind::Press);
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Key(press)),
            Event::Key(press)
        );
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Key(key(KeyEventKind::Release))),
            Event::Tick
        );
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Key(key(KeyEventKind::Repeat))),
            Event::Tick
        );
    }

    #[test]
    fn test_resize_and_other_events() {
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Resize(80, 24)),
            Event::Resize(80, 24)
        );
        assert_eq!(Event::from_crossterm(CrosstermEvent::FocusLost), Event::Tick);
    }
}
