//! SeqLab TUI — dual-scenario sequence outcome explorer.
//!
//! Layout:
//! - Two scenario panes side by side, each with five selector rows and the
//!   ranked outcome listing (counts, percentages, most-frequent RDR models)
//! - Comparison footer showing each scenario's share of the combined count
//! - One-line status bar with key hints
//!
//! Usage: `seqlab-tui [--instrument CL|ES] [--data path.csv]`
//! Without `--data` a deterministic synthetic demo dataset is used.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use seqlab_core::data::{demo_dataset, load_dataset, Dataset, Instrument};

use crate::app::AppState;

fn main() -> Result<()> {
    let (dataset, label, is_synthetic) = build_dataset()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(dataset, label);
    if is_synthetic {
        app.set_status("no CSV supplied — showing synthetic demo data");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Resolve `--instrument` / `--data` from argv and load the dataset.
///
/// The argument surface is two flags; clap stays in the CLI crate.
fn build_dataset() -> Result<(Dataset, String, bool)> {
    let mut instrument = Instrument::Es;
    let mut data_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--instrument" => {
                let code = match args.next() {
                    Some(code) => code,
                    None => bail!("--instrument requires a value (CL or ES)"),
                };
                instrument = match Instrument::parse(&code) {
                    Some(instrument) => instrument,
                    None => bail!("unknown instrument '{code}' (expected one of: CL, ES)"),
                };
            }
            "--data" => {
                data_path = match args.next() {
                    Some(path) => Some(PathBuf::from(path)),
                    None => bail!("--data requires a path"),
                };
            }
            other => bail!("unknown argument '{other}' (expected --instrument or --data)"),
        }
    }

    match data_path {
        Some(path) => {
            let dataset = load_dataset(&path, instrument)?;
            let label = format!(
                "{} — {} rows ({} skipped)",
                instrument,
                dataset.len(),
                dataset.skipped_rows()
            );
            Ok((dataset, label, false))
        }
        None => {
            let dataset = demo_dataset(instrument, 1_000);
            let label = format!("{instrument} — {} rows (synthetic)", dataset.len());
            Ok((dataset, label, true))
        }
    }
}
