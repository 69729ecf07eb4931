//! Ports table

use super::table::TableModel;
use crate::format::Tone;
use ratatui::style::Style;
use statusdash_core::{Port, Snapshot};

pub const PORT_HEADER: [&str; 3] = ["Port", "Number", "Reachable"];

/// Build the ports table: one row per port, green when up, red when down
pub fn ports_table(snapshot: &Snapshot) -> TableModel {
    let mut table = TableModel::new(PORT_HEADER)
        .title("Ports")
        .row_separator(true);

    for (i, port) in snapshot.ports.iter().enumerate() {
        let tone = if port.reachable {
            Tone::Affirmative
        } else {
            Tone::Alert
        };
        table.push_row(port_row(port));
        table = table.row_style(i, Style::default().fg(tone.color()));
    }
    table
}

fn port_row(port: &Port) -> Vec<String> {
    let state = if port.reachable { "up" } else { "down" };
    vec![port.name.clone(), port.port.clone(), state.to_string()]
}
