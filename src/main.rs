//! Folio - themeable portfolio page for the terminal
//!
//! Without a subcommand this opens the interactive page. Subcommands give
//! headless access to search, preferences and theming for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::cli::{
    AskArgs, CliError, ConfigArgs, CounterArgs, HighlightArgs, PrefsArgs, RateArgs, SearchArgs,
    ThemeArgs,
};
use folio::config::Config;
use folio::constants::APP_NAME;
use folio::logging;
use folio::viewport::ViewportMode;

/// Folio - themeable portfolio page with live search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// URL-style parameters for the page, e.g. "desktop=1"
    #[arg(long, value_name = "QUERY_STRING", default_value = "")]
    params: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search suggestions and filtered panels
    Search(SearchArgs),
    /// Highlight query matches in a piece of text
    Highlight(HighlightArgs),
    /// Show or change stored preferences
    Prefs(PrefsArgs),
    /// Print the resolved theme for the stored preferences
    Theme(ThemeArgs),
    /// Ask the assistant a question
    Ask(AskArgs),
    /// Submit a rating
    Rate(RateArgs),
    /// Fetch the visitor and hit counters
    Counter(CounterArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Search(args) => args.execute(),
            Self::Highlight(args) => args.execute(),
            Self::Prefs(args) => args.execute(),
            Self::Theme(args) => args.execute(),
            Self::Ask(args) => args.execute(),
            Self::Rate(args) => args.execute(),
            Self::Counter(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        logging::init_stderr(cli.verbose)?;
        if let Err(e) = command.execute() {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    logging::init_file(&Config::log_file_path()?, cli.verbose)?;
    run_page(&cli)
}

#[cfg(feature = "ratatui")]
fn run_page(cli: &Cli) -> Result<()> {
    use folio::prefs::{PreferenceContext, PreferenceStore};
    use folio::storage::FileStorage;
    use folio::tui;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };

    let storage = FileStorage::open(Config::storage_file_path()?);
    let store = PreferenceStore::new(storage, config.ui.theme_mode.prefers_dark());
    let prefs = PreferenceContext::new(store);
    let viewport = ViewportMode::from_query(&cli.params);
    let (visitors, hits) = tui::start_counters(&config);

    tracing::info!("Starting {APP_NAME} (viewport: {viewport:?})");
    let mut app_state = tui::AppState::new(prefs, viewport, visitors, hits)?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(not(feature = "ratatui"))]
fn run_page(cli: &Cli) -> Result<()> {
    let viewport = ViewportMode::from_query(&cli.params);
    anyhow::bail!(
        "{APP_NAME} was built without the terminal page ({viewport:?} requested); use a subcommand"
    )
}
