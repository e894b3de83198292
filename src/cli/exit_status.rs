use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): generation or check completed.
/// - `Failure` (1): a structural validation error in the input tables
///   (short row, header mismatch, translation-count mismatch, duplicate key).
/// - `Error` (2): environment or internal error (unreadable directory,
///   unwritable output path, broken config).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
