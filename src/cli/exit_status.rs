use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for checker
/// tools.
///
/// - `Success` (0): Command completed successfully, no findings
/// - `Failure` (1): Command completed but found problems (skipped files,
///   missing keys, unresolved lookups)
/// - `Error` (2): Command failed due to internal error (config error, I/O
///   error, bad arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no findings.
    Success,
    /// Command completed but found problems.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
