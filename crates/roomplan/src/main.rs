mod cli;
mod commands;
mod logging;
mod rows;
mod store;

use std::path::PathBuf;

use clap::Parser;

use crate::cli::Cli;
use crate::store::Store;

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roomplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);

    logging::init_logging(&data_dir, &cli.log_level)?;

    let mut store = Store::open(&data_dir)?;
    commands::run(&mut store, cli.command)?;

    tracing::info!("command complete");
    Ok(())
}
