//! rTimesheet library root.
//! Exposes the conversion pipeline, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{Conversion, ConversionRequest, ConvertLogic, LogCollector, ProgressSink};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` must work before a config file exists
    if let Commands::Init = cli.command {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config once (custom path via --config)
    let cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
