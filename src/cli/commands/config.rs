use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = &cli.command {
        if *path {
            match &cli.config {
                Some(custom) => println!("{custom}"),
                None => println!("{}", Config::config_file().display()),
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*path {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
