use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// Creates the configuration directory and a default configuration file,
/// leaving an existing file untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(Path::new);
    let existed = custom.map(Path::exists).unwrap_or_else(|| Config::config_file().exists());

    let path = Config::init_all(custom)?;

    if existed {
        success(format!("Config file already present: {}", path.display()));
    } else {
        success(format!("Config file created: {}", path.display()));
    }
    Ok(())
}
