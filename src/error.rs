use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop generation, see `exit_code` for the process status of each.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("could not read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse json from `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: json::Error,
    },

    #[error("property `aspas` does not exist on the parsed JSON from `{}`", .path.display())]
    MissingAspas { path: PathBuf },

    #[error("invalid ASPA entry in `{}`: {reason}", .path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("writing to disk raised: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WizardError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WizardError::Read { .. } => 1,
            WizardError::Parse { .. } => 2,
            WizardError::MissingAspas { .. } | WizardError::InvalidRecord { .. } => 3,
            WizardError::Write { .. } => 4,
        }
    }
}
