//! Main TUI application state and logic

use crate::diagnostics::DiagnosticLog;
use crate::parser::lexer::{Scanner, Token};
use crate::parser::parse::{Parser, SyntaxError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The program being inspected
    pub source_code: String,

    /// Scanner output
    pub tokens: Vec<Token>,

    /// Lexical errors and assignment confirmations, in emission order
    pub diagnostics: DiagnosticLog,

    /// Parser verdict
    pub outcome: Result<(), SyntaxError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the highlighted token
    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Scan and parse `source_code`, keeping every result for display
    pub fn from_source(source_code: String) -> Self {
        let mut diagnostics = DiagnosticLog::new();
        let tokens = Scanner::new(&source_code).tokenize(&mut diagnostics);
        let outcome = Parser::new(&tokens, &mut diagnostics).parse_program();

        let status_message = match &outcome {
            Ok(()) => format!("Parsed {} token(s)", tokens.len()),
            Err(_) => "Syntax error (press e to jump to it)".to_string(),
        };

        App {
            source_code,
            tokens,
            diagnostics,
            outcome,
            focused_pane: FocusedPane::Tokens,
            selected_token: 0,
            source_scroll: 0,
            tokens_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Index of the token the parse failed on (may equal `tokens.len()`)
    pub fn error_position(&self) -> Option<usize> {
        self.outcome.as_ref().err().map(|e| e.position)
    }

    /// Line of the selected token
    pub fn current_line(&self) -> Option<usize> {
        self.tokens
            .get(self.selected_token)
            .map(|t| t.location().line)
    }

    fn error_line(&self) -> Option<usize> {
        let err = self.outcome.as_ref().err()?;
        err.location.map(|l| l.line)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left: Source | Right: Tokens
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let current_line = self.current_line();
        let error_line = self.error_line();
        let error_position = self.error_position();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            current_line,
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            &self.outcome,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[1],
            &self.tokens,
            self.selected_token,
            error_position,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        let selected = (!self.tokens.is_empty()).then_some(self.selected_token);
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            selected,
            self.tokens.len(),
            self.outcome.is_ok(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected_token.saturating_sub(1)),
                FocusedPane::Source => self.step_line(false),
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected_token.saturating_add(1)),
                FocusedPane::Source => self.step_line(true),
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1);
                }
            },
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.tokens.len().saturating_sub(1)),
            KeyCode::Char('e') | KeyCode::Char('E') => self.jump_to_error(),
            _ => {}
        }
    }

    /// Select a token, clamped to the token list
    fn select(&mut self, index: usize) {
        if self.tokens.is_empty() {
            return;
        }
        self.selected_token = index.min(self.tokens.len() - 1);
        if let Some(token) = self.tokens.get(self.selected_token) {
            self.status_message = format!("{} at {}", token, token.location());
        }
    }

    /// Select the first token on the next (or previous) line that has tokens
    fn step_line(&mut self, forward: bool) {
        let Some(line) = self.current_line() else {
            return;
        };

        let target_line = if forward {
            self.tokens
                .iter()
                .map(|t| t.location().line)
                .find(|&l| l > line)
        } else {
            self.tokens
                .iter()
                .rev()
                .map(|t| t.location().line)
                .find(|&l| l < line)
        };

        if let Some(target) = target_line {
            if let Some(index) = self.tokens.iter().position(|t| t.location().line == target) {
                self.select(index);
            }
        }
    }

    fn jump_to_error(&mut self) {
        match self.error_position() {
            None => {
                self.status_message = "No syntax error".to_string();
            }
            Some(position) => {
                self.select(position);
                self.focused_pane = FocusedPane::Tokens;
                if position >= self.tokens.len() {
                    self.status_message = "Syntax error at end of input".to_string();
                }
            }
        }
    }
}
