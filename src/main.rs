use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use mysaathi::app::App;
use mysaathi::config::Config;
use mysaathi::event::{AppEvent, EventHandler};
use mysaathi::profile::Language;
use mysaathi::store::json_store::{self, JsonStore};
use mysaathi::store::profile_store::ProfileStore;
use mysaathi::{keys, logging, ui};

#[derive(Parser)]
#[command(name = "mysaathi", version, about = "Terminal learning companion for students and teachers")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Welcome screen language (en, hi, pa)")]
    language: Option<String>,

    #[arg(long, help = "Directory for the stored profile and log file")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Forget the stored profile and start from the welcome screen")]
    reset: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not read config ({e}), using defaults");
        Config::default()
    });
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(code) = cli.language {
        match Language::from_code(&code) {
            Some(language) => config.language = language.code().to_string(),
            None => eprintln!("Warning: unknown language '{code}', keeping {}", config.language),
        }
    }
    config.validate();

    let data_dir = cli.data_dir.unwrap_or_else(json_store::default_data_dir);
    if let Err(e) = logging::init(&data_dir) {
        eprintln!("Warning: logging disabled ({e})");
    }
    info!(data_dir = %data_dir.display(), "starting");

    let backend = match JsonStore::with_base_dir(data_dir) {
        Ok(backend) => Some(backend),
        Err(e) => {
            warn!(error = %e, "data directory unavailable, profile will not persist");
            None
        }
    };
    let mut store = ProfileStore::new(backend);
    if cli.reset {
        if let Err(e) = store.clear() {
            warn!(error = %e, "could not erase stored profile");
        }
        info!("stored profile reset");
    }

    let tick_rate = config.tick_rate();
    let mut app = App::new(config, store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }
    info!("exiting");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            // Steady typing suppresses idle ticks, so due jobs also run here.
            AppEvent::Key(key) => {
                let now = Instant::now();
                keys::handle_key(app, key, now);
                app.tick(now);
            }
            AppEvent::Tick(now) => app.tick(now),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
