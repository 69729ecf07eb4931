//! Module list and the detail panel for the selected module

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use statusdash_core::Snapshot;

const NO_SELECTION: &str = "Select a module to view info";

/// Module names with the selected entry highlighted
pub fn module_list(snapshot: &Snapshot, selected: Option<usize>) -> (List<'static>, ListState) {
    let items: Vec<ListItem> = snapshot
        .modules
        .iter()
        .map(|module| ListItem::new(module.name.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Modules ({}) ", snapshot.module_count()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let state = ListState::default().with_selected(valid_selection(snapshot, selected));
    (list, state)
}

/// Text of the Module Info panel
pub fn module_info_lines(snapshot: &Snapshot, selected: Option<usize>) -> Vec<Line<'static>> {
    match valid_selection(snapshot, selected).and_then(|i| snapshot.module(i)) {
        Some(module) => vec![
            Line::from(module.description.clone()),
            Line::from(format!("Category: {}", module.category)),
            Line::from(format!("Type: {}", module.kind)),
        ],
        None => vec![Line::from(NO_SELECTION)],
    }
}

/// Module Info panel
pub fn module_info(snapshot: &Snapshot, selected: Option<usize>) -> Paragraph<'static> {
    Paragraph::new(module_info_lines(snapshot, selected))
        .block(
            Block::default()
                .title(" Module Info ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: true })
}

fn valid_selection(snapshot: &Snapshot, selected: Option<usize>) -> Option<usize> {
    selected.filter(|&i| i < snapshot.module_count())
}
