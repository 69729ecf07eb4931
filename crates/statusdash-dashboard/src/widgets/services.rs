//! Services table
//!
//! Persistent services first (in configured order), then setup/one-shot
//! services in collector order. Each row is colored by its Health column.

use super::table::TableModel;
use crate::format::{format_uptime, Tone, PLACEHOLDER};
use crate::partition::partition;
use chrono::{DateTime, Utc};
use ratatui::style::Style;
use statusdash_core::{LayoutConfig, Service, Snapshot};

pub const SERVICE_HEADER: [&str; 6] = ["Service", "Status", "Health", "Uptime", "CPU%", "Memory"];

/// Column whose value decides the row color
const STATE_COLUMN: usize = 2;

/// Build the services table model for a snapshot
pub fn services_table(snapshot: &Snapshot, layout: &LayoutConfig, now: DateTime<Utc>) -> TableModel {
    let (persistent, setup) = partition(&snapshot.services, layout.persistent_services.as_slice());

    let rows: Vec<Vec<String>> = persistent
        .into_iter()
        .chain(setup)
        .map(|svc| service_row(snapshot, svc, now))
        .collect();

    let tones: Vec<Tone> = rows
        .iter()
        .map(|row| Tone::from_state(row.get(STATE_COLUMN).map(String::as_str).unwrap_or("")))
        .collect();

    let mut table = TableModel::new(SERVICE_HEADER)
        .title("Services")
        .row_separator(false)
        .rows(rows);
    for (i, tone) in tones.into_iter().enumerate() {
        table = table.row_style(i, Style::default().fg(tone.color()));
    }
    table
}

/// Display cells for one service
pub fn service_row(snapshot: &Snapshot, svc: &Service, now: DateTime<Utc>) -> Vec<String> {
    let (cpu, memory) = match snapshot.stats_for(svc) {
        Some(stats) => (format!("{:.1}", stats.cpu), stats.memory_used().to_string()),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };

    vec![
        svc.label.clone(),
        svc.status.clone(),
        health_text(svc),
        format_uptime(&svc.started_at, now),
        cpu,
        memory,
    ]
}

/// Health token, with the exit code appended for failed stopped services
pub fn health_text(svc: &Service) -> String {
    if svc.exited_with_error() {
        format!("{} ({})", svc.health, svc.exit_code)
    } else {
        svc.health.clone()
    }
}
