//! Text panels: header, build, users, controls, storage and volumes

use crate::format::normalize_repo;
use crate::host::HostInfo;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use statusdash_core::{CommitSource, PanelEntry, Snapshot};

const MISSING_SUFFIX: &str = " (missing)";

fn panel(title: &str, border: Color, lines: Vec<Line<'static>>) -> Paragraph<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if !title.is_empty() {
        block = block.title(format!(" {} ", title));
    }
    Paragraph::new(lines).block(block)
}

fn missing_line(text: String) -> Line<'static> {
    Line::from(format!("{}{}", text, MISSING_SUFFIX))
        .style(Style::default().add_modifier(Modifier::DIM))
}

pub fn header_lines(snapshot: &Snapshot, host: &HostInfo) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Host: {}", host.hostname)),
        Line::from(format!("IP: {}", host.ip)),
        Line::from(format!("Project: {}", snapshot.project)),
        Line::from(format!("Network: {}", snapshot.network)),
    ]
}

/// Host and project identity, untitled
pub fn header_panel(snapshot: &Snapshot, host: &HostInfo) -> Paragraph<'static> {
    panel("", Color::Reset, header_lines(snapshot, host))
}

pub fn build_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let build = &snapshot.build;
    let mut lines = Vec::new();

    if !build.branch.is_empty() {
        lines.push(Line::from(format!("Branch: {}", build.branch)));
    }

    let repo = normalize_repo(&build.repo);
    if !repo.is_empty() {
        lines.push(Line::from(format!("Repo: {}", repo)));
    }

    let commit = if build.commit.is_empty() {
        "Git: unknown".to_string()
    } else {
        let tag = match build.commit_source() {
            CommitSource::ImageLabel => " [image]",
            CommitSource::SourceTree => " [source]",
            CommitSource::Other => "",
        };
        format!("Git: {}{}", build.commit, tag)
    };
    lines.push(Line::from(commit));
    lines.push(Line::from(format!("Updated: {}", snapshot.timestamp)));
    lines
}

pub fn build_panel(snapshot: &Snapshot) -> Paragraph<'static> {
    panel("Build", Color::Yellow, build_lines(snapshot))
}

pub fn users_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let users = snapshot.users;
    vec![
        Line::from(format!("  Accounts: {}", users.accounts)),
        Line::from(format!("  Online: {}", users.online)),
        Line::from(format!("  Characters: {}", users.characters)),
        Line::from(format!("  Active 7d: {}", users.active7d)),
    ]
}

pub fn users_panel(snapshot: &Snapshot) -> Paragraph<'static> {
    panel("Users", Color::Reset, users_lines(snapshot))
}

pub fn controls_panel() -> Paragraph<'static> {
    panel(
        "Controls",
        Color::Magenta,
        vec![
            Line::from("  ↓/j : Down"),
            Line::from("  ↑/k : Up"),
            Line::from("  q   : Quit"),
        ],
    )
}

/// Storage directories for the curated keys, in configured order
pub fn storage_lines(snapshot: &Snapshot, entries: &[PanelEntry]) -> Vec<Line<'static>> {
    entries
        .iter()
        .filter_map(|entry| {
            let info = snapshot.storage.get(&entry.key)?;
            let text = format!("  {:<15} {} ({})", entry.label, info.path, info.size);
            Some(if info.exists {
                Line::from(text)
            } else {
                missing_line(text)
            })
        })
        .collect()
}

pub fn storage_panel(snapshot: &Snapshot, entries: &[PanelEntry]) -> Paragraph<'static> {
    panel("Storage", Color::Yellow, storage_lines(snapshot, entries))
}

/// Named volumes for the curated keys, in configured order
pub fn volume_lines(snapshot: &Snapshot, entries: &[PanelEntry]) -> Vec<Line<'static>> {
    entries
        .iter()
        .filter_map(|entry| {
            let info = snapshot.volumes.get(&entry.key)?;
            let text = format!("  {:<13} {}", entry.label, info.mountpoint);
            Some(if info.exists {
                Line::from(text)
            } else {
                missing_line(text)
            })
        })
        .collect()
}

pub fn volumes_panel(snapshot: &Snapshot, entries: &[PanelEntry]) -> Paragraph<'static> {
    panel("Volumes", Color::Yellow, volume_lines(snapshot, entries))
}
