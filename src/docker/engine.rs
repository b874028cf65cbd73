use std::ffi::OsStr;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{LaunchError, RuntimeUnavailableError};

use super::run::{exit_code, run_attached};
use super::types::{ContainerCommand, ContainerRuntime};

pub const DOCKER: &str = "docker";

/// Verify that the Docker daemon is reachable.
pub fn ensure_available() -> Result<(), RuntimeUnavailableError> {
    check_daemon(DOCKER.as_ref())
}

/// Ask `program` for its server version; any failure means the runtime is unusable.
fn check_daemon(program: &OsStr) -> Result<(), RuntimeUnavailableError> {
    let status = Command::new(program)
        .args(["version", "--format", "{{.Server.Version}}"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| RuntimeUnavailableError {
            reason: format!(
                "failed to invoke `{}` ({e}), is it installed and on PATH?",
                program.to_string_lossy()
            ),
        })?;

    if !status.success() {
        return Err(RuntimeUnavailableError {
            reason: format!("docker daemon is not running ({status})"),
        });
    }
    Ok(())
}

/// [`ContainerRuntime`] backed by the local `docker` CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerCli;

impl ContainerRuntime for DockerCli {
    fn ensure_available(&self) -> Result<(), RuntimeUnavailableError> {
        ensure_available()
    }

    fn run(&self, cmd: &ContainerCommand) -> Result<i32, LaunchError> {
        debug!(command = %cmd.display(), "starting container");
        let status = run_attached(cmd).map_err(LaunchError::Spawn)?;
        info!(%status, "container exited");
        Ok(exit_code(status))
    }
}
