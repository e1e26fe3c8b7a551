use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::logging;

pub mod browse;
pub mod list;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    logging::init(cli.log_file).map_err(|e| e.to_string())?;
    let config = AppConfig::resolve(cli.url, cli.timeout).map_err(|e| e.to_string())?;

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => browse::run(config).await,
        Command::List(args) => list::run(args, &config).await,
    }
}
