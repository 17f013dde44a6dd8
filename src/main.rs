//! Roster - Student Records
//!
//! A terminal application for keeping a roster of students (name, roll
//! number, grade). The roster is saved to a local JSON file after every
//! change and reloaded on the next start.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use roster::application::{App, AppMode, Config, DEFAULT_DATA_FILE, DEFAULT_EXPORT_FILE};
use roster::infrastructure::FileRepository;
use roster::presentation::{render_ui, InputHandler};

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Keep a roster of student records in the terminal")]
struct Cli {
    /// File the roster is saved to
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Default target for CSV export
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    export_file: PathBuf,

    /// Append log output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Entry point for the roster terminal application.
///
/// Loads the roster, runs the event loop until the user quits, then saves
/// the roster one final time.
///
/// # Errors
///
/// Returns an error if terminal setup fails or the log file cannot be
/// opened.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(ref path) = cli.log_file {
        init_logging(path)?;
    }

    let config = Config {
        data_file: cli.data_file,
        export_file: cli.export_file,
    };
    info!("starting with roster file {}", config.data_file.display());

    let repository = FileRepository::new(config.data_file.clone());
    let mut app = App::start(Box::new(repository), &config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    if let Err(err) = app.shutdown() {
        eprintln!("Error saving data to {}: {}", config.data_file.display(), err);
    }

    Ok(())
}

/// Sends `log` output to `path`. Nothing is logged to the terminal, which
/// the UI owns.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Main application event loop.
///
/// Each key press is handled to completion, including any save it
/// triggers, before the next event is read. Returns when the user presses
/// 'q' on the table.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Browse => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
