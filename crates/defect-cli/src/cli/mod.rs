mod commands;
mod helpers;

use clap::Parser;
use defect_core::domain::RateError;

pub(crate) use helpers::init_tracing;

pub fn run_from_env() -> i32 {
    match parse_and_dispatch(std::env::args().collect()) {
        Ok(code) => code,
        Err(error) => {
            let rate_error = error.as_rate_error();
            eprintln!("{}", rate_error.diagnostic_line());
            if let Some(summary_line) = rate_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            rate_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "defect-rates",
    version,
    about = "Point-defect rate constants for irradiated materials"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compute derived rate constants for one parameter deck
    Compute(commands::ComputeArgs),
    /// Recompute rate constants over a linear temperature grid
    Sweep(commands::SweepArgs),
    /// Compare computed rate constants against a recorded baseline
    Check(commands::CheckArgs),
    /// Print the reference tungsten parameter deck
    Template(commands::TemplateArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Compute(args) => commands::run_compute_command(args),
        CliCommand::Sweep(args) => commands::run_sweep_command(args),
        CliCommand::Check(args) => commands::run_check_command(args),
        CliCommand::Template(args) => commands::run_template_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(RateError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RateError> for CliError {
    fn from(error: RateError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_rate_error(&self) -> RateError {
        match self {
            Self::Usage(message) => {
                RateError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => RateError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
