use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::list;

#[derive(Debug, Parser)]
#[command(name = "countries")]
#[command(about = "Browse the public country list in your terminal", long_about = None)]
pub struct Cli {
    /// Countries endpoint URL (overrides COUNTRIES_API_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// HTTP timeout in seconds, 0 disables it (overrides COUNTRIES_TIMEOUT)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Write logs to this file (overrides COUNTRIES_LOG_FILE)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive browser (default)
    Browse,

    /// Print one page of countries without the interactive UI
    List(list::Args),
}
