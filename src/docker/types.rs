use crate::error::{LaunchError, RuntimeUnavailableError};

use super::engine::DOCKER;

/// Describes a container invocation. `args` is the full argument list passed
/// to `docker`; `envs` is set on the `docker` client process so that
/// `-e NAME` flags can forward values without putting them on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerCommand {
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl ContainerCommand {
    /// Shell-quoted form of the invocation, for logging. Contains variable
    /// names only, never `envs` values.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(DOCKER).chain(self.args.iter().map(String::as_str)))
    }

    #[cfg(test)]
    pub(crate) fn env(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The container runtime as seen by the launcher.
pub trait ContainerRuntime {
    /// Fail unless the runtime is installed and its daemon answers.
    fn ensure_available(&self) -> Result<(), RuntimeUnavailableError>;

    /// Run `cmd` attached in the foreground and return its exit code.
    fn run(&self, cmd: &ContainerCommand) -> Result<i32, LaunchError>;
}
