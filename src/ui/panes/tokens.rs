//! Token list pane rendering

use super::{clamp_scroll, follow, pane_block, visible_height};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    let color = match kind {
        TokenKind::Keyword => DEFAULT_THEME.keyword,
        TokenKind::IntegerLiteral | TokenKind::BooleanLiteral => DEFAULT_THEME.number,
        TokenKind::Identifier => DEFAULT_THEME.identifier,
        TokenKind::Operator => DEFAULT_THEME.primary,
        TokenKind::Punctuation => DEFAULT_THEME.punctuation,
    };
    Style::default().fg(color)
}

/// One row: index, kind, value, and position
fn token_row(index: usize, token: &Token) -> Line<'static> {
    let location = token.location();
    Line::from(vec![
        Span::styled(
            format!("{:4} ", index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<16}", token.kind().name()), kind_style(token.kind())),
        Span::styled(
            format!("{:<10}", token.value().to_string()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!(" {}:{}", location.line, location.column),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])
}

/// Render the token list.
///
/// `error_position` is the index of the token the parse failed on; when it
/// equals `tokens.len()` the parse ran out of input and an extra
/// end-of-input row is shown.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    error_position: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);

    let show_end_row = error_position == Some(tokens.len());
    if tokens.is_empty() && !show_end_row {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let error_style = Style::default()
        .bg(DEFAULT_THEME.error)
        .fg(ratatui::style::Color::Black)
        .add_modifier(Modifier::BOLD);
    let selected_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .add_modifier(Modifier::BOLD);

    let mut all_items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let mut row = token_row(index, token);
            if error_position == Some(index) {
                for span in &mut row.spans {
                    span.style = error_style;
                }
            } else if index == selected {
                for span in &mut row.spans {
                    span.style = span.style.patch(selected_style);
                }
            }
            ListItem::new(row)
        })
        .collect();

    if show_end_row {
        all_items.push(ListItem::new(Line::from(Span::styled(
            format!("{:4} <end of input>", tokens.len()),
            error_style,
        ))));
    }

    let total_items = all_items.len();
    let visible_height = visible_height(area);
    *scroll_offset = follow(*scroll_offset, selected, visible_height);
    *scroll_offset = clamp_scroll(*scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
