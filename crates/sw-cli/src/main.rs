//! CLI frontend for the Scafwording XP tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "swxp",
    about = "Scafwording XP — experience points and levels",
    version,
    propagate_version = true
)]
struct Cli {
    /// Store file holding XP and level
    #[arg(
        short,
        long,
        global = true,
        env = "SWXP_STORE",
        default_value = ".scafwording.json"
    )]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add XP (negative amounts subtract)
    Add {
        /// XP to add
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Print the current XP total
    Xp,

    /// Print the current level
    Level,

    /// Print the XP needed for the next level
    Next,

    /// Print level, XP and XP to next level
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the status into an element of a JSON page file
    Render {
        /// JSON object of element id to text
        #[arg(short, long)]
        page: PathBuf,

        /// Element id to write into
        #[arg(short, long, default_value = sw_xp::DEFAULT_ELEMENT_ID)]
        element: String,
    },

    /// Compare the stored level with the level derived from XP
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli.store.as_path();

    let result = match cli.command {
        Commands::Add { amount } => commands::add::run(store, amount),
        Commands::Xp => commands::show::xp(store),
        Commands::Level => commands::show::level(store),
        Commands::Next => commands::show::next(store),
        Commands::Status { json } => commands::status::run(store, json),
        Commands::Render { page, element } => commands::render::run(store, &page, &element),
        Commands::Check => commands::check::run(store),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
