mod commands;
mod helpers;
mod logging;

use clap::Parser;
use ffs_core::domain::{DEFAULT_DATA_FILE, DEFAULT_LOG_FILE, FfsError};
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    if let Err(error) = logging::setup_logging() {
        eprintln!("WARNING: [IO.CLI_LOGGING] {error:#}");
    }

    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            let failure = error.as_ffs_error();
            eprintln!("{}", failure.diagnostic_line());
            eprintln!("{}", failure.fatal_exit_line());
            failure.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("ffs-rate".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => commands::run_rate_command(cli.into()),
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
    name = "ffs-rate",
    version,
    about = "Nucleation rate from a forward flux sampling run"
)]
struct Cli {
    /// Structure data file read by the MD engine
    #[arg(long, value_name = "path", default_value = DEFAULT_DATA_FILE)]
    datafile: PathBuf,
    /// Job output log holding status, trajectory and bounding-box lines
    #[arg(long, value_name = "path", default_value = DEFAULT_LOG_FILE)]
    logfile: PathBuf,
}

impl From<Cli> for commands::RateArgs {
    fn from(cli: Cli) -> Self {
        Self {
            data_file: cli.datafile,
            log_file: cli.logfile,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(FfsError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_ffs_error(&self) -> FfsError {
        match self {
            Self::Usage(message) => {
                FfsError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => FfsError::internal("INTERNAL.CLI", format!("{error:#}")),
        }
    }
}
