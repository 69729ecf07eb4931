//! Mapping of terminal events to dashboard inputs

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use statusdash_core::Snapshot;

/// Inputs understood by the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Quit,
    /// Select the next module
    Next,
    /// Select the previous module
    Previous,
    Resize,
    /// A fresh snapshot arrived from the poller
    SnapshotReady(Box<Snapshot>),
    Ignored,
}

impl Input {
    /// Classify a crossterm event
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(*key),
            Event::Resize(_, _) => Self::Resize,
            _ => Self::Ignored,
        }
    }

    fn from_key(key: KeyEvent) -> Self {
        if is_quit_event(key) {
            Self::Quit
        } else if is_next_event(key) {
            Self::Next
        } else if is_previous_event(key) {
            Self::Previous
        } else {
            Self::Ignored
        }
    }
}

impl From<Snapshot> for Input {
    fn from(snapshot: Snapshot) -> Self {
        Self::SnapshotReady(Box::new(snapshot))
    }
}

/// Check if a key event is a quit command (q or Ctrl+C)
pub fn is_quit_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Down arrow or j
pub fn is_next_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

/// Up arrow or k
pub fn is_previous_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}
