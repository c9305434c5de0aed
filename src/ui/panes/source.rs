//! Source code pane rendering with syntax highlighting
//!
//! Displays the MiniLang program with line numbers and light highlighting.
//! The line of the selected token gets the current-line background; the line
//! holding the syntax error is drawn in the error style.
//!
//! Highlighting is a simple character walk rather than a second scanner run,
//! so it also colors lexemes the scanner dropped.

use super::{clamp_scroll, follow, pane_block, visible_height};
use crate::parser::constants::KEYWORDS;
use crate::parser::lexer::is_comment_line;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one MiniLang line
fn highlight_source_code(line: &str) -> Line<'_> {
    if is_comment_line(line) {
        return Line::from(Span::styled(
            line,
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_ascii_alphanumeric() {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let style = get_word_style(&current_word);
            spans.push(Span::styled(std::mem::take(&mut current_word), style));
        }

        let style = match c {
            '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
            ':' => Style::default().fg(DEFAULT_THEME.punctuation),
            '+' | '-' | '*' | '/' | '=' | '!' => Style::default().fg(DEFAULT_THEME.fg),
            _ => Style::default(),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = get_word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_word_style(word: &str) -> Style {
    if KEYWORDS.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.identifier)
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: Option<usize>,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = visible_height(area);

    // Keep the selected line on screen
    if let Some(line) = current_line.filter(|&l| l > 0 && l <= total_lines) {
        *scroll_offset = follow(*scroll_offset, line - 1, visible_height);
    }
    *scroll_offset = clamp_scroll(*scroll_offset, total_lines, visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = current_line == Some(line_num);
            let is_error = error_line == Some(line_num);
            let line_num_str = format!("{:4} ", line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_code(line);

            if is_error {
                // White text on red, overriding highlighting
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
            } else if is_current {
                let current_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(current_style);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
