//! Shelf CLI - inspect a directory of EPUB books from the command line

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shelf_core::Shelf;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the .epub files
    #[arg(short, long, global = true, env = "SHELF_DIR", default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books whose file name contains FILTER
    List {
        /// Case-sensitive file name filter (empty lists everything)
        #[arg(default_value = "")]
        filter: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display metadata of a book
    Info {
        /// Book identifier, e.g. alice.epub
        book: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the table of contents of a book
    Toc {
        /// Book identifier, e.g. alice.epub
        book: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a raw resource from inside a book to stdout
    Cat {
        /// Book identifier, e.g. alice.epub
        book: String,

        /// Resource path below OEBPS, e.g. text/ch1.xhtml
        resource: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info,shelf_core=error"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let shelf = Shelf::open(&cli.dir)?;

    match cli.command {
        Commands::List { filter, json } => commands::list(&shelf, &filter, json),
        Commands::Info { book, json } => commands::info(&shelf, &book, json),
        Commands::Toc { book, json } => commands::toc(&shelf, &book, json),
        Commands::Cat { book, resource } => commands::cat(&shelf, &book, &resource),
    }
}
