//! Main run loop for the dashboard
//!
//! Fetches the first snapshot, takes over the terminal, starts the poller and
//! then waits on terminal events and poller handoffs until the user quits.

use crate::{
    app::{App, Control},
    error::{Result, StatusDashError},
    event::Input,
    poller::{handoff, spawn_poller, HandoffReceiver},
    source::{CommandSource, SnapshotFetcher},
    terminal::{self, TerminalGuard},
    ui::{compose, RenderContext},
};
use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use statusdash_core::{DashConfig, LayoutConfig, Snapshot};
use std::io;
use std::sync::Arc;
use tracing::{debug, info};

/// Run the dashboard against the configured collector command
pub async fn run(config: &DashConfig) -> Result<()> {
    let source = CommandSource::from_config(&config.collector);
    info!(collector = %source.describe(), "starting dashboard");
    run_with_source(config, Arc::new(source)).await
}

/// Run the dashboard against any snapshot source.
///
/// A failing first fetch is returned before the terminal is touched.
pub async fn run_with_source(config: &DashConfig, source: Arc<dyn SnapshotFetcher>) -> Result<()> {
    let initial = fetch_once(Arc::clone(&source)).await?;

    let mut terminal = terminal::init()?;
    let guard = TerminalGuard::new();

    let (sender, mut snapshots) = handoff();
    let poller = spawn_poller(source, config.refresh_interval(), sender);

    let result = event_loop(
        &mut terminal,
        App::new(initial),
        EventStream::new(),
        &mut snapshots,
        &config.layout,
    )
    .await;

    poller.abort();
    let restored = guard.restore();
    info!("dashboard stopped");
    result.and(restored)
}

/// Fetch one snapshot on the blocking pool
pub async fn fetch_once(source: Arc<dyn SnapshotFetcher>) -> Result<Snapshot> {
    let snapshot = tokio::task::spawn_blocking(move || source.fetch())
        .await
        .map_err(|e| StatusDashError::Other(format!("Snapshot fetch task failed: {}", e)))??;
    Ok(snapshot)
}

/// Draw, then handle terminal events and snapshot handoffs until quit.
///
/// The loop also ends cleanly when the event stream is exhausted.
async fn event_loop<B, E>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut events: E,
    snapshots: &mut HandoffReceiver,
    layout: &LayoutConfig,
) -> Result<()>
where
    B: Backend,
    E: Stream<Item = io::Result<Event>> + Unpin,
{
    draw(terminal, &app, layout)?;

    loop {
        let input = tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => Input::from_event(&event),
                Some(Err(e)) => {
                    return Err(StatusDashError::Dashboard(format!(
                        "Failed to read terminal event: {}",
                        e
                    )))
                }
                None => return Ok(()),
            },
            Some(snapshot) = snapshots.recv() => {
                debug!(services = snapshot.services.len(), "applying new snapshot");
                Input::from(snapshot)
            }
        };

        match app.handle(input) {
            Control::Quit => return Ok(()),
            Control::Redraw => draw(terminal, &app, layout)?,
            Control::Idle => {}
        }
    }
}

/// Compose and draw one frame
fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App, layout: &LayoutConfig) -> Result<()> {
    let ctx = RenderContext::capture();
    terminal
        .draw(|frame| {
            let view = compose(&app.snapshot, app.selected, &ctx, layout);
            frame.render_widget(view, frame.area());
        })
        .map_err(|e| StatusDashError::Dashboard(format!("Failed to draw dashboard: {}", e)))?;
    Ok(())
}
