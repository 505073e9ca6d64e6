use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            let problems = ConfigLogic::check(cfg);
            if problems > 0 {
                return Err(AppError::Config(format!(
                    "{} problem(s) found in {}",
                    problems,
                    path.display()
                )));
            }
        }

        if *edit_config {
            if !path.exists() {
                std::fs::create_dir_all(Config::config_dir())?;
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
            // show what will be used next time
            ConfigLogic::print_file(&path)?;
        }
    }

    Ok(())
}
