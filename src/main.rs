mod app;
mod document;
mod terminal;
mod ui;

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use finni_config::{constants, Config};
use finni_core::EventHandler;
use finni_logger::LogLevel;

use app::App;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    // Initialize logger before anything that logs
    let log_file_path = config
        .log_file_path()
        .unwrap_or_else(|_| std::env::temp_dir().join(constants::LOG_FILE_NAME));
    let min_log_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    if let Err(e) = finni_logger::init(&log_file_path, min_log_level) {
        eprintln!("Logging disabled: {}: {}", log_file_path.display(), e);
    }
    finni_logger::info("Application started");

    // Load the document before touching the terminal so errors print normally
    let file_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut app = App::open(file_path, config.editor.clone())?;

    // Initialize terminal; the guard restores it on every exit path
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let events = EventHandler::new(Duration::from_millis(constants::EVENT_HANDLER_INTERVAL_MS));

    let result = app.run(&mut terminal, &events);

    drop(terminal);
    guard.restore()?;

    if let Err(err) = result {
        finni_logger::error(format!("{:#}", err));
        eprintln!("Error: {:?}", err);
    }

    finni_logger::info("Application stopped");
    Ok(())
}
