//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source display with keyword highlighting and the selected token's line
//! - [`tokens`]: Token list in scan order, with the failing token marked
//! - [`diagnostics`]: Lexical errors, assignment confirmations, and the verdict
//! - [`status`]: Status bar with keybindings and parse state
//!
//! Each pane module exports a primary `render_*_pane()` function. Scroll
//! offsets are owned by the [`App`](crate::ui::App) and passed in by
//! reference so the renderers can clamp them to the visible area.

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Rows available inside a bordered block, min 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so the window never scrolls past the last item
pub(crate) fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

/// Smallest scroll change that keeps `index` inside the window
pub(crate) fn follow(offset: usize, index: usize, visible: usize) -> usize {
    if index < offset {
        index
    } else if index >= offset + visible {
        index + 1 - visible
    } else {
        offset
    }
}

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
