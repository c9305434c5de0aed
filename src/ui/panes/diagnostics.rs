//! Diagnostics pane rendering
//!
//! Lists everything the scanner and parser reported, in order, followed by
//! the verdict of the parse.

use super::{clamp_scroll, pane_block, visible_height};
use crate::diagnostics::DiagnosticLog;
use crate::parser::parse::SyntaxError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding},
    Frame,
};

/// Text and style of each row, verdict last
pub(crate) fn diagnostic_rows(
    log: &DiagnosticLog,
    outcome: &Result<(), SyntaxError>,
) -> Vec<(String, Style)> {
    let mut rows: Vec<(String, Style)> = log
        .entries
        .iter()
        .map(|d| {
            let style = if d.is_error() {
                Style::default().fg(DEFAULT_THEME.secondary)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            (d.to_string(), style)
        })
        .collect();

    let verdict = match outcome {
        Ok(()) => (
            "Parse OK".to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        Err(err) => (
            match err.location {
                Some(location) => format!("Syntax Error: {} ({})", err, location),
                None => format!("Syntax Error: {}", err),
            },
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
    };
    rows.push(verdict);
    rows
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    log: &DiagnosticLog,
    outcome: &Result<(), SyntaxError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Diagnostics ", is_focused).padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = diagnostic_rows(log, outcome)
        .into_iter()
        .map(|(text, style)| ListItem::new(text).style(style))
        .collect();

    let total_items = all_items.len();
    let visible_height = visible_height(area);
    *scroll_offset = clamp_scroll(*scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
