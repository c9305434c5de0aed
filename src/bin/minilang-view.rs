// minilang-view: browse the tokens and diagnostics of a MiniLang file in the terminal

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use minilang::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("minilang-view");

    if args.len() != 2 {
        eprintln!("Usage: {} <file_path>", program_name);
        std::process::exit(1);
    }

    let path = &args[1];
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;
    let mut app = App::from_source(source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    // Same exit contract as the plain CLI
    if app.outcome.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
