use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use docdeck::config::Config;
use docdeck::domain::Framework;
use docdeck::model::Model;
use docdeck::seed::SeedData;
use docdeck::ViewMode;

mod app;
mod handlers;
mod ui;

/// Compliance document browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (docdeck-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// JSON seed file to load instead of the built-in documents
    #[arg(long)]
    data: Option<PathBuf>,

    /// Initial view mode for every page (list, grid, tree)
    #[arg(long)]
    view: Option<ViewMode>,

    /// Page to open first (iso9001, iso2, edc, ce)
    #[arg(short, long)]
    framework: Option<Framework>,
}

/// Runtime state: the pure model plus what only the terminal needs
pub struct App {
    pub model: Model,
    pub config_path: Option<PathBuf>,
    /// Cards per row in the last rendered grid
    pub grid_columns: usize,
    /// Rows visible in the last rendered content area
    pub page_rows: usize,
    /// First grid row drawn
    pub grid_offset: usize,
}

impl App {
    fn new(config: Config, config_path: Option<PathBuf>, seed: SeedData) -> Self {
        let pages = seed.into_pages(&config);
        if pages.is_empty() {
            tracing::warn!("seed data has no pages");
        }
        let model = Model::new(pages, config.current_user.clone(), config.vim_mode);

        Self {
            model,
            config_path,
            grid_columns: 1,
            page_rows: 10,
            grid_offset: 0,
        }
    }
}

/// Install the file logger. The terminal owns stdout, so logs only go to a
/// file, and only when asked for.
fn init_logging(debug: bool) -> Result<Option<WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_path = docdeck::utils::get_debug_log_path();
    let dir = log_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    let file_name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "docdeck-debug.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docdeck=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %log_path.display(), "debug logging enabled");
    Ok(Some(guard))
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = init_logging(args.debug)?;

    // Load configuration
    let (mut config, config_path) = Config::load_or_default(args.config.as_deref())?;
    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded config"),
        None => tracing::info!("no config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(view) = args.view {
        config.forced_view_mode = Some(view);
    }
    if let Some(data) = args.data {
        config.data_path = Some(data);
    }

    let seed = match &config.data_path {
        Some(path) => SeedData::load_json(path)?,
        None => SeedData::builtin()?,
    };

    // Initialize app
    let mut app = App::new(config, config_path, seed);
    if let Some(framework) = args.framework {
        if !app.model.show_framework(framework) {
            anyhow::bail!("No documents loaded for framework {}", framework.as_str());
        }
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Poll so toasts can expire without a key press
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }

    Ok(())
}
