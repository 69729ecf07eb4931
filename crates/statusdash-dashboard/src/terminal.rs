//! Terminal ownership for the fleet dashboard
//!
//! The dashboard draws on the alternate screen in raw mode, so the shell the
//! operator launched it from comes back untouched once they press `q`, the
//! collector fails mid-session, or the process panics. `run_with_source`
//! calls [`init`] only after the first snapshot was fetched and holds a
//! [`TerminalGuard`] until the event loop returns.

use crate::error::{Result, StatusDashError};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Crossterm-backed terminal the dashboard draws on
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// A step that fails undoes the ones before it, so an error leaves the
/// operator's terminal as it was.
pub fn init() -> Result<Tui> {
    enable_raw_mode()
        .map_err(|e| StatusDashError::Dashboard(format!("Failed to enable raw mode: {}", e)))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(StatusDashError::Dashboard(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| {
        let _ = restore();
        StatusDashError::Dashboard(format!("Failed to create terminal: {}", e))
    })
}

/// Leave the alternate screen and raw mode
pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen).map_err(|e| {
        StatusDashError::Dashboard(format!("Failed to leave alternate screen: {}", e))
    })?;

    disable_raw_mode()
        .map_err(|e| StatusDashError::Dashboard(format!("Failed to disable raw mode: {}", e)))?;

    Ok(())
}

/// Puts the terminal back when the dashboard session ends.
///
/// The normal exit path calls [`TerminalGuard::restore`] so a failure can be
/// reported. An early return or a panic unwinding out of the event loop
/// restores on drop instead, where errors are dropped.
pub struct TerminalGuard {
    armed: bool,
    restore: fn() -> Result<()>,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self::with_restore(restore)
    }

    fn with_restore(restore: fn() -> Result<()>) -> Self {
        Self {
            armed: true,
            restore,
        }
    }

    /// Restore now and report the outcome; the drop becomes a no-op
    pub fn restore(mut self) -> Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = (self.restore)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Touches the real terminal; run manually with --ignored
    #[test]
    #[ignore]
    fn test_init_restore() {
        let terminal = init().expect("Failed to init terminal");
        assert!(terminal.size().is_ok());
        restore().expect("Failed to restore terminal");
    }

    static DROP_RESTORES: AtomicUsize = AtomicUsize::new(0);
    static EXPLICIT_RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_drop_restore() -> Result<()> {
        DROP_RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn failing_restore() -> Result<()> {
        EXPLICIT_RESTORES.fetch_add(1, Ordering::SeqCst);
        Err(StatusDashError::Dashboard("tty closed".to_string()))
    }

    #[test]
    fn test_guard_restores_when_session_unwinds() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::with_restore(count_drop_restore);
            panic!("event loop panicked");
        });
        assert!(result.is_err());
        assert_eq!(DROP_RESTORES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_restore_reports_error_and_runs_once() {
        let guard = TerminalGuard::with_restore(failing_restore);
        let err = guard.restore().unwrap_err();
        assert!(matches!(err, StatusDashError::Dashboard(_)));
        // consumed by restore(); the drop did not run it again
        assert_eq!(EXPLICIT_RESTORES.load(Ordering::SeqCst), 1);
    }
}
