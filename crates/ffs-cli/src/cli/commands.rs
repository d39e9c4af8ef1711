use super::CliError;
use super::helpers::current_working_dir;
use ffs_core::domain::RateRequest;
use ffs_core::modules::{NucleationRateModule, RateExecutor};
use std::path::PathBuf;

pub(super) struct RateArgs {
    pub(super) data_file: PathBuf,
    pub(super) log_file: PathBuf,
}

pub(super) fn run_rate_command(args: RateArgs) -> Result<i32, CliError> {
    let working_dir = current_working_dir()?;
    let request = RateRequest::new(working_dir, args.data_file, args.log_file);
    tracing::info!(
        working_dir = %request.working_dir.display(),
        data_file = %request.data_file.display(),
        log_file = %request.log_file.display(),
        "computing nucleation rate"
    );

    let report = NucleationRateModule
        .execute(&request)
        .map_err(CliError::Compute)?;
    if report.unmatched_lines > 0 {
        tracing::debug!(
            unmatched = report.unmatched_lines,
            "job log lines did not match any known pattern"
        );
    }

    print!("{}", report.render());
    Ok(0)
}
