// Rust guideline compliant 2026-10-18

//! Folio CLI Application
//!
//! Command-line host for the Folio portfolio content store.

use clap::Parser;
use folio_cli::{commands, create_formatter, render_error, OutputFormatter, Workspace};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Folio: portfolio profile, achievements and content browser",
    long_about = "Folio loads a portfolio's profile, achievements and thought-leadership content from a data directory, remembers the chosen filter and page between runs, and caches the filtered view for a short freshness window.",
    after_help = "Examples:\n  folio init\n  folio show\n  folio list --filter talk\n  folio list --page 2\n  folio prefs --json\n  folio sweep\n"
)]
struct Cli {
    /// Data directory holding config, data files and saved state
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a data directory
    Init,

    /// Show the profile and achievements
    Show,

    /// List one page of content
    List {
        /// Content filter (all, talk, blog, whitepaper, article)
        #[arg(long)]
        filter: Option<String>,

        /// Page number (1-based)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// Show saved preferences and view cache status
    Prefs,

    /// Evict the view cache if it has expired
    Sweep,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    let formatter = create_formatter(cli.json);
    let workspace = Workspace::new(cli.data_dir);

    if let Err(err) = run(cli.command, &workspace, formatter.as_ref()) {
        eprintln!("{}", render_error(formatter.as_ref(), &err));
        std::process::exit(1);
    }

    Ok(())
}

fn run(
    command: Option<Commands>,
    workspace: &Workspace,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init) => commands::init::execute(workspace, formatter),
        Some(Commands::Show) => commands::show::execute(workspace, formatter),
        Some(Commands::List { filter, page }) => {
            commands::list::execute(workspace, filter, page, formatter)
        }
        Some(Commands::Prefs) => commands::prefs::execute(workspace, formatter),
        Some(Commands::Sweep) => commands::sweep::execute(workspace, formatter),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {other}"),
    }
}
