mod browser;
mod cli;
mod commands;
mod config;
mod country;
mod env;
mod error;
mod http;
mod loader;
mod logging;
mod output;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
