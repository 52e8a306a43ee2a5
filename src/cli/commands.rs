//! Command dispatch: one subcommand per invocation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument, warn};

use crate::application::CalculationService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{settings_path, OutputFormat, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Capacity {
            demand,
            throughput,
            periods,
        } => {
            let (service, format) = prepare(cli)?;
            let calc = service.capacity(*demand, *throughput, *periods)?;
            output::print_one(format, &calc)?;
        }
        Commands::Cost {
            headcount,
            rate,
            periods,
            utilization,
        } => {
            let (service, format) = prepare(cli)?;
            let calc = service.cost(*headcount, *rate, *periods, *utilization)?;
            output::print_one(format, &calc)?;
        }
        Commands::Timeline { scope, throughput } => {
            let (service, format) = prepare(cli)?;
            let calc = service.timeline(*scope, *throughput)?;
            output::print_one(format, &calc)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(cli)?,
            ConfigCommands::Path => config_path(cli)?,
        },
        Commands::Completion { shell } => completion(*shell),
    }
    Ok(())
}

/// Resolve the output format (`--json` wins).
///
/// Only an explicit `--config` can fail the command; broken implicit settings
/// fall back to the defaults.
fn prepare(cli: &Cli) -> CliResult<(CalculationService, OutputFormat)> {
    let service = CalculationService::new();
    if cli.json {
        return Ok((service, OutputFormat::Json));
    }
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) if cli.config.is_none() => {
            warn!("ignoring settings: {}", e);
            Settings::default()
        }
        Err(e) => return Err(e.into()),
    };
    debug!(?settings, "settings loaded");
    Ok((service, settings.format))
}

#[instrument(skip(cli))]
fn config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if cli.json {
        output::info(&serde_json::to_string_pretty(&output::JsonOut {
            ok: true,
            data: &settings,
        })?);
    } else {
        output::info(settings.to_toml()?.trim_end());
    }
    Ok(())
}

#[instrument(skip(cli))]
fn config_path(cli: &Cli) -> CliResult<()> {
    let path = settings_path(cli.config.as_deref()).ok_or_else(|| {
        CliError::Usage("cannot determine settings path, pass --config <path>".into())
    })?;
    output::info(&path.display());
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
