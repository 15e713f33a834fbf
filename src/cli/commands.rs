//! Command dispatch

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::{confirm, StatsReport};
use crate::application::{ApplicationError, ApplicationResult};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::{output, render, CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::ServiceContainer;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => {
            let container = ServiceContainer::new(load_settings(cli)?);
            explore(&container)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(&load_settings(cli)?),
            ConfigCommands::Path => config_path(),
            ConfigCommands::Init { force } => config_init(*force),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load()?.with_data_dir(cli.data_dir.clone()))
}

/// Run interactive sessions until the user declines to restart or input ends.
#[instrument(skip(container))]
pub fn explore(container: &ServiceContainer) -> CliResult<()> {
    loop {
        match run_session(container) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(ApplicationError::InputClosed) => {
                debug!("explore: input closed");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// One pass: select filters, load, report, page rows.
/// Returns whether the user wants another pass.
fn run_session(container: &ServiceContainer) -> ApplicationResult<bool> {
    output::info(GREETING);
    let selection = container.selector().select()?;
    output::separator();

    let table = container.loader().load_data(&selection)?;
    debug!(
        "run_session: {} trips for {} / {} / {}",
        table.len(),
        selection.city,
        selection.month,
        selection.day
    );

    let report = StatsReport::compute(&table);
    render::print_report(&report, selection.city);

    container.viewer().view(&table, |offset, batch| {
        output::info(&render::render_trips(offset, batch));
    })?;

    confirm(container.prompt.as_ref(), RESTART_QUESTION)
}

fn config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            output::info(&path.display());
            if !path.exists() {
                output::warning("config file does not exist (run `bikeshare config init`)");
            }
            Ok(())
        }
        None => Err(CliError::Usage(
            "cannot determine config directory for this platform".into(),
        )),
    }
}

fn config_init(force: bool) -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| {
        CliError::Usage("cannot determine config directory for this platform".into())
    })?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| CliError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}
