// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use tripwise::{load_catalog, CatalogStore, Category, PlaceBrowser};

#[derive(Parser, Debug)]
#[command(name = "tripwise", version, about = "Browse nearby attractions, restaurants and hotels")]
struct Cli {
    /// Catalog file (.json or .csv). Defaults to the built-in sample places.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Write logs to this file instead of stderr (needed for debug logs while browsing)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive browser (default)
    Browse,

    /// Print the visible list for the given filters
    List {
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,

        /// attraction | restaurant | hotel (singular or plural)
        #[arg(long)]
        category: Option<Category>,

        /// Mark this place id as favorite before listing (repeatable)
        #[arg(long = "favorite")]
        favorites: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli)?;

    let catalog = build_catalog(&cli)?;
    let browser = PlaceBrowser::new(catalog);

    match cli.command {
        Some(Command::List { search, category, favorites }) => {
            run_list(browser, search, category, &favorites);
        }
        Some(Command::Browse) | None => run_ui_mode(browser)?,
    }

    Ok(())
}

/// Install the subscriber: a log file if one was given, otherwise stderr
///
/// The browser owns the terminal in raw mode, so stderr output there is
/// capped at `warn` whatever the filter says.
fn initialize_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {:?}", path))?;
            registry
                .with(fmt::layer().with_target(false).with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr)
                        .with_filter(stderr_ceiling(cli.command.as_ref())),
                )
                .init();
        }
    }

    Ok(())
}

/// Most verbose level allowed on stderr for a command
fn stderr_ceiling(command: Option<&Command>) -> LevelFilter {
    match command {
        Some(Command::List { .. }) => LevelFilter::TRACE,
        Some(Command::Browse) | None => LevelFilter::WARN,
    }
}

fn build_catalog(cli: &Cli) -> Result<CatalogStore> {
    match &cli.catalog {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog file");
            CatalogStore::new(load_catalog(path)?)
        }
        None => CatalogStore::with_samples(),
    }
}

fn run_list(mut browser: PlaceBrowser, search: String, category: Option<Category>, favorites: &[String]) {
    for id in favorites {
        if browser.toggle_favorite(id).is_none() {
            eprintln!("⚠️  Unknown place id {:?} - ignored", id);
        }
    }
    browser.set_search_text(search);
    browser.set_category_filter(category);

    let visible = browser.visible_places();

    println!("📍 Nearby ({} of {})", visible.len(), browser.catalog().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if visible.is_empty() {
        println!("No places match the current filters");
        return;
    }

    for v in &visible {
        let heart = if v.is_favorite { "♥" } else { " " };
        println!(
            "{} {:<24} {:<11} {:<20} {}",
            heart,
            v.name,
            v.category.as_str(),
            v.summary_line(),
            v.address
        );
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(browser: PlaceBrowser) -> Result<()> {
    println!("🖥️  Loading TripWise...\n");
    println!("✓ {} places in catalog", browser.catalog().len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(browser);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed ({} favorites this session)", app.browser.favorite_count());

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_browser: PlaceBrowser) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print a list: tripwise list --search <TEXT>");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_caps_stderr_logs_at_warn() {
        let cli = Cli::parse_from(["tripwise", "--log-level", "debug"]);
        assert_eq!(stderr_ceiling(cli.command.as_ref()), LevelFilter::WARN);

        let cli = Cli::parse_from(["tripwise", "browse", "--log-level", "trace"]);
        assert_eq!(stderr_ceiling(cli.command.as_ref()), LevelFilter::WARN);
    }

    #[test]
    fn test_list_keeps_full_stderr_logs() {
        let cli = Cli::parse_from(["tripwise", "list", "--log-level", "debug"]);
        assert_eq!(stderr_ceiling(cli.command.as_ref()), LevelFilter::TRACE);
    }

    #[test]
    fn test_log_file_flag_is_global() {
        let cli = Cli::parse_from(["tripwise", "browse", "--log-file", "/tmp/tripwise.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tripwise.log")));
    }

    #[test]
    fn test_list_parses_filters() {
        let cli = Cli::parse_from([
            "tripwise", "list", "--search", "inn", "--category", "Hotels", "--favorite", "6",
        ]);
        match cli.command {
            Some(Command::List { search, category, favorites }) => {
                assert_eq!(search, "inn");
                assert_eq!(category, Some(Category::Hotel));
                assert_eq!(favorites, vec!["6".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
