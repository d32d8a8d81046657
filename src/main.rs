use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};
use tracing_subscriber::EnvFilter;

use alphalist::{config, sample, utils};

mod app;
mod handlers;

use app::App;
use config::Config;

/// Terminal contact list with an A-Z jump navigator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory (alphalist-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (^D/U, ^F/B, gg, G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML or JSON file mapping section keys to items
    #[arg(long)]
    data: Option<PathBuf>,

    /// Hide the section navigator
    #[arg(long)]
    hide_nav: bool,
}

/// Frame interval while a scroll animation is running
const ANIMATION_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(250);

fn init_tracing() -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = File::create(&log_path)
        .with_context(|| format!("Failed to create debug log {}", log_path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Failed to install debug logging to {}", log_path.display()))
}

/// Determine the config file path with fallback logic
///
/// `None` means no config file was found and built-in defaults apply.
fn get_config_path(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    // Try ~/.config/alphalist/config.yaml
    if let Some(config_path) = utils::get_default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_tracing()?;
        tracing::debug!("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.hide_nav {
        config.hide_nav = true;
    }
    if args.data.is_some() {
        config.data = args.data;
    }

    let data = match &config.data {
        Some(path) => config::load_sections(path)?,
        None => sample::contacts(),
    };
    tracing::debug!(sections = data.len(), "section data loaded");

    let mut app = App::new(&config, data);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    app.view.unmount();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        // Deferred measurement and animation steps run once per turn
        app.view.tick();

        let animating = app.view.list().is_some_and(|list| list.is_animating());
        let timeout = if animating { ANIMATION_POLL } else { IDLE_POLL };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key)?;
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
