use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and a default config file. An `--input`
/// given here is stored as the default input.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::config_file();

    info("Initializing rPoolBoard…");

    let written = Config::init_all(cli.input.clone(), cli.test)?;

    if written {
        success(format!("Config file created: {}", path.display()));
    } else if cli.test {
        info("Test mode: configuration file not written.");
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    if let Some(input) = &cli.input {
        info(format!("Input sheet : {}", input));
    }

    success("rPoolBoard initialization completed!");
    Ok(())
}
