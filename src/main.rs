//! componentkit - a terminal component gallery.
//!
//! Runs the demo page by default; `--story` opens a single story and
//! `--list-stories` prints the catalog.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};

use componentkit::config::Config;
use componentkit::events::EventHandler;
use componentkit::stories::StoryCatalog;
use componentkit::tui::TerminalGuard;
use componentkit::ui::theme::{init_theme, theme_preference, ThemePreference};
use componentkit::{data, logging, App, AppError};

#[derive(Parser, Debug)]
#[command(name = "componentkit", version, about = "Themeable terminal UI components")]
struct Cli {
    /// Open a single story, e.g. `data-table/with-selection`.
    #[arg(long, value_name = "ID")]
    story: Option<String>,

    /// Print the story catalog and exit.
    #[arg(long)]
    list_stories: bool,

    /// Only list stories matching this query (implies --list-stories).
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Override the configured theme.
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,

    /// Show a JSON array of objects in the demo table.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Use this settings file instead of the default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save the theme chosen in the UI when exiting.
    #[arg(long)]
    save_theme: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_stories || cli.search.is_some() {
        list_stories(cli.search.as_deref().unwrap_or(""));
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {e:#}");
    }

    let mut config = load_config(&cli);
    let settings = config.settings.clone();
    init_theme(cli.theme.unwrap_or(settings.theme));

    let mut app = match &cli.data {
        Some(path) => {
            let records = data::load_records(path).map_err(|e| explain(e.into()))?;
            App::with_records(settings.clone(), records)
        }
        None => App::new(settings.clone()),
    };

    if let Some(id) = &cli.story {
        if !app.open_story(id) {
            bail!("No story with id '{id}'. Run with --list-stories to see them all.");
        }
    }

    let result = run(&mut app, settings.tick_rate_ms);
    logging::shutdown();
    result?;

    if cli.save_theme {
        config.settings.theme = theme_preference();
        let saved = match &cli.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        saved.map_err(|e| explain(e.into()))?;
        info!(theme = config.settings.theme.id(), "Theme saved");
    }

    Ok(())
}

/// Run the event loop until the app quits. The terminal is restored on
/// every exit path.
fn run(app: &mut App, tick_rate_ms: u64) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::new()
        .map_err(|e| explain(AppError::terminal(e.to_string())))?;
    let events = EventHandler::with_tick_rate(tick_rate_ms);

    while !app.should_quit() {
        guard
            .terminal()
            .draw(|frame| app.view(frame))
            .context("drawing frame")?;
        let event = events.next().context("reading terminal events")?;
        app.update(event);
    }
    Ok(())
}

/// Load settings, falling back to defaults on any failure.
fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        let e = AppError::from(e);
        warn!(error = %e, "Failed to load config, using defaults");
        eprintln!("Warning: {}", e.user_message());
        Config::default()
    })
}

/// Attach the user-facing message and hint to an error.
fn explain(err: AppError) -> anyhow::Error {
    let mut message = err.user_message();
    if let Some(hint) = err.suggested_action() {
        message.push('\n');
        message.push_str(hint);
    }
    anyhow::Error::new(err).context(message)
}

fn list_stories(query: &str) {
    let catalog = StoryCatalog::new();
    let stories = catalog.search(query);
    if stories.is_empty() {
        println!("No stories match '{query}'.");
        return;
    }
    let width = stories.iter().map(|story| story.id.len()).max().unwrap_or(0);
    for story in stories {
        println!("{:<width$}  {}", story.id, story.description);
    }
}
