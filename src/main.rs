//! rowtable - a scrollable record-table widget for the terminal.
//!
//! This binary runs the demo application: the widget built from its
//! built-in mock configuration, driven by keyboard and mouse.

use std::io;
use std::panic;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rowtable::app::{self, App};
use rowtable::events::EventHandler;
use rowtable::record::{mock_records, MOCK_ROW_COUNT};
use rowtable::{logging, TableConfig};

/// Demo of the rowtable widget with the built-in mock data.
#[derive(Debug, Parser)]
#[command(name = "rowtable", version, about)]
struct Cli {
    /// Number of mock rows to load.
    #[arg(long, default_value_t = MOCK_ROW_COUNT)]
    rows: usize,

    /// Widget width in character cells; fits the declared columns if omitted.
    #[arg(long)]
    width: Option<u16>,

    /// Body height in rows.
    #[arg(long)]
    height: Option<u16>,

    /// Event poll tick rate in milliseconds.
    #[arg(long, default_value_t = 100)]
    tick_rate: u64,
}

/// Setup the terminal for TUI mode with mouse capture.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init()?;
    install_panic_hook();

    let config = TableConfig {
        width: cli.width,
        height: cli.height,
        ..TableConfig::default()
    };
    let mut app = App::new(config)?;
    let records = mock_records().into_iter().take(cli.rows).collect();
    app.load(Some(records))?;

    let mut terminal = setup_terminal()?;
    let events = EventHandler::with_tick_rate(cli.tick_rate);
    let result = app::run(&mut terminal, &mut app, &events);
    restore_terminal(&mut terminal)?;

    logging::shutdown();
    result
}
