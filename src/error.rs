use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The container runtime could not be reached.
#[derive(Debug, Error)]
#[error("container runtime is unavailable: {reason}")]
pub struct RuntimeUnavailableError {
    pub reason: String,
}

/// One or more required credentials were unset or empty after the
/// environment file was applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required credentials: {}", .missing_fields.join(", "))]
pub struct MissingCredentialError {
    pub missing_fields: Vec<&'static str>,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    RuntimeUnavailable(#[from] RuntimeUnavailableError),

    #[error(transparent)]
    MissingCredentials(#[from] MissingCredentialError),

    #[error("failed to read environment file {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start the container runtime")]
    Spawn(#[source] io::Error),
}
