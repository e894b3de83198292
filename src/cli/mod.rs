mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, GenerateCommand};
pub use exit_status::ExitStatus;
pub use run::{RunSummary, TableStat, run};

use crate::error::StructuralError;

/// Main entry point for the locgen CLI.
///
/// Dispatches to the command handler, prints the summary or diagnostic, and
/// maps errors to the exit status convention: structural table errors exit 1,
/// environment errors exit 2.
pub fn run_cli(args: Arguments) -> ExitStatus {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return ExitStatus::Success;
    };

    match run::run(args) {
        Ok(summary) => {
            report::print_summary(&summary, verbose);
            ExitStatus::Success
        }
        Err(err) => {
            report::print_error(&err);
            if err.downcast_ref::<StructuralError>().is_some() {
                ExitStatus::Failure
            } else {
                ExitStatus::Error
            }
        }
    }
}
