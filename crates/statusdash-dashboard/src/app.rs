//! Dashboard state and the state transitions driven by input
//!
//! `App` is owned by the event loop. It never touches the terminal; the loop
//! asks it what to do with each [`Input`] and redraws when told to.

use crate::event::Input;
use statusdash_core::Snapshot;

/// What the loop should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
    Redraw,
    /// Nothing changed
    Idle,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// Snapshot currently on screen
    pub snapshot: Snapshot,
    /// Index into `snapshot.modules`, `None` when the list is empty
    pub selected: Option<usize>,
}

impl App {
    /// Start on `snapshot` with the first module selected, if any
    pub fn new(snapshot: Snapshot) -> Self {
        let selected = (snapshot.module_count() > 0).then_some(0);
        Self { snapshot, selected }
    }

    /// Apply one input
    pub fn handle(&mut self, input: Input) -> Control {
        match input {
            Input::Quit => Control::Quit,
            Input::Next => redraw_if(self.select_next()),
            Input::Previous => redraw_if(self.select_previous()),
            Input::Resize => Control::Redraw,
            Input::SnapshotReady(snapshot) => {
                self.replace_snapshot(*snapshot);
                Control::Redraw
            }
            Input::Ignored => Control::Idle,
        }
    }

    /// Move the selection down one entry; returns whether it moved
    pub fn select_next(&mut self) -> bool {
        let count = self.snapshot.module_count();
        let next = match self.selected {
            _ if count == 0 => return false,
            None => 0,
            Some(i) if i + 1 < count => i + 1,
            Some(_) => return false,
        };
        self.selected = Some(next);
        true
    }

    /// Move the selection up one entry; returns whether it moved
    pub fn select_previous(&mut self) -> bool {
        let count = self.snapshot.module_count();
        let previous = match self.selected {
            _ if count == 0 => return false,
            None => 0,
            Some(i) if i > 0 => i - 1,
            Some(_) => return false,
        };
        self.selected = Some(previous);
        true
    }

    /// Swap in a new snapshot, keeping the selection within its module list
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        let count = snapshot.module_count();
        self.snapshot = snapshot;
        self.selected = match clamp_selection(self.selected, count) {
            None if count > 0 => Some(0),
            selected => selected,
        };
    }
}

/// Clamp `selected` to `0..count`, or `None` for an empty list
pub fn clamp_selection(selected: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    selected.map(|i| i.min(count - 1))
}

fn redraw_if(changed: bool) -> Control {
    if changed {
        Control::Redraw
    } else {
        Control::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusdash_core::Module;

    fn with_modules(count: usize) -> Snapshot {
        Snapshot {
            modules: (0..count)
                .map(|i| Module {
                    name: format!("mod-{}", i),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_app_creation() {
        assert_eq!(App::new(with_modules(3)).selected, Some(0));
        assert_eq!(App::new(Snapshot::default()).selected, None);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = App::new(with_modules(2));

        assert_eq!(app.handle(Input::Previous), Control::Idle);
        assert_eq!(app.selected, Some(0));

        assert_eq!(app.handle(Input::Next), Control::Redraw);
        assert_eq!(app.selected, Some(1));

        assert_eq!(app.handle(Input::Next), Control::Idle);
        assert_eq!(app.selected, Some(1));

        assert_eq!(app.handle(Input::Previous), Control::Redraw);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut app = App::new(Snapshot::default());
        assert_eq!(app.handle(Input::Next), Control::Idle);
        assert_eq!(app.handle(Input::Previous), Control::Idle);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_navigation_from_no_selection() {
        let mut app = App::new(with_modules(3));
        app.selected = None;
        assert_eq!(app.handle(Input::Previous), Control::Redraw);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_snapshot_shrink_clamps_selection() {
        let mut app = App::new(with_modules(5));
        app.selected = Some(4);

        let control = app.handle(Input::SnapshotReady(Box::new(with_modules(2))));
        assert_eq!(control, Control::Redraw);
        assert_eq!(app.selected, Some(1));

        app.handle(Input::SnapshotReady(Box::new(with_modules(0))));
        assert_eq!(app.selected, None);

        app.handle(Input::SnapshotReady(Box::new(with_modules(4))));
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_snapshot_keeps_valid_selection() {
        let mut app = App::new(with_modules(5));
        app.selected = Some(2);
        app.replace_snapshot(with_modules(6));
        assert_eq!(app.selected, Some(2));
        assert_eq!(app.snapshot.module_count(), 6);
    }

    #[test]
    fn test_quit_resize_and_ignored() {
        let mut app = App::new(with_modules(1));
        assert_eq!(app.handle(Input::Quit), Control::Quit);
        assert_eq!(app.handle(Input::Resize), Control::Redraw);
        assert_eq!(app.handle(Input::Ignored), Control::Idle);
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(4), 2), Some(1));
        assert_eq!(clamp_selection(Some(1), 2), Some(1));
        assert_eq!(clamp_selection(Some(0), 0), None);
        assert_eq!(clamp_selection(None, 3), None);
    }
}
