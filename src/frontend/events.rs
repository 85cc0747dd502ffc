//! Frontend-agnostic input events.
//!
//! The terminal frontend translates its native crossterm stream into this
//! enum so the core only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers};

/// Events emitted by the frontend toward the core.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }
}
