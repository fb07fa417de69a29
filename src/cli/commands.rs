//! Command dispatch: maps parsed arguments onto application services

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::GenealogyService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    dispatch(cli, global_config_path().as_deref())
}

/// Settings are loaded only by the commands that consume them, so a broken
/// config file does not block `config path` or `config template`.
fn dispatch(cli: &Cli, global_path: Option<&Path>) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Show) => {
            let settings = resolve_settings(cli, global_path)?;
            output::raw(&cmd_show(&settings)?);
            Ok(())
        }
        Some(Commands::Config { command }) => cmd_config(cli, command, global_path),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Layered settings with the `--strict` flag applied last.
fn resolve_settings(cli: &Cli, global_path: Option<&Path>) -> CliResult<Settings> {
    let mut settings = Settings::load_from(global_path)?;
    if cli.strict {
        settings.strict = true;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(settings))]
fn cmd_show(settings: &Settings) -> CliResult<String> {
    let service = GenealogyService::new(settings.validation_policy());
    Ok(service.show_sample()?)
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands, global_path: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = resolve_settings(cli, global_path)?;
            output::header("Effective configuration");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_path {
            Some(path) => output::info(&path.display()),
            None => output::info("no global config location on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
