use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::prompt::Prompter;
use crate::models::FolderType;
use crate::output::write_json_atomic;
use crate::timeline::{parse_mbox_file, parse_places_file};
use crate::utils::init_logging;

pub const HISTORY_OUTPUT_FILE: &str = "history_firefox.json";

#[derive(Parser)]
#[command(name = "timeline-export")]
#[command(version = "0.1.0")]
#[command(about = "Export Thunderbird mail and Firefox history as timeline JSON", long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a Thunderbird mbox archive into email events
    Mail {
        /// Folder the archive comes from; asked for when omitted
        #[arg(long, value_enum, ignore_case = true)]
        folder: Option<FolderType>,

        /// Path to the mbox file; asked for when omitted
        mbox: Option<PathBuf>,

        /// Output file [default: events_<folder>.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a Firefox places.sqlite into history entries grouped by URL
    History {
        /// Path to places.sqlite; asked for when omitted
        places: Option<PathBuf>,

        /// Output file [default: history_firefox.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub count: usize,
    pub output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match cli.command {
        Some(Commands::Mail { folder, mbox, output }) => {
            let summary = export_mail(&mut prompter, folder, mbox, output)?;
            println!("\nParsed {} emails → {}", summary.count, summary.output.display());
        }
        Some(Commands::History { places, output }) => {
            let summary = export_history(&mut prompter, places, output)?;
            println!(
                "\nExported {} grouped history entries → {}",
                summary.count,
                summary.output.display()
            );
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Run the mail pipeline, prompting for whatever wasn't passed in
pub fn export_mail<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    folder: Option<FolderType>,
    mbox: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ExportSummary> {
    let folder = match folder {
        Some(folder) => folder,
        None => prompter.ask_folder()?,
    };
    let mbox = match mbox {
        Some(path) => path,
        None => prompter.ask_mbox_path(folder)?,
    };
    let output = output.unwrap_or_else(|| PathBuf::from(folder.output_file_name()));

    let events = parse_mbox_file(&mbox)?;
    write_output(&output, &events, events.len())
}

/// Run the history pipeline, prompting for the database path if it wasn't passed in
pub fn export_history<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    places: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ExportSummary> {
    let places = match places {
        Some(path) => path,
        None => prompter.ask_places_path()?,
    };
    let output = output.unwrap_or_else(|| PathBuf::from(HISTORY_OUTPUT_FILE));

    let entries = parse_places_file(&places)?;
    write_output(&output, &entries, entries.len())
}

fn write_output<T: serde::Serialize + ?Sized>(
    output: &Path,
    value: &T,
    count: usize,
) -> Result<ExportSummary> {
    write_json_atomic(output, value)?;
    Ok(ExportSummary { count, output: output.to_path_buf() })
}
