use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{CredentialSet, Environment, env_file};
use crate::docker::ContainerRuntime;
use crate::error::LaunchError;

use super::commands::collector_command;
use super::settings::{COLLECTOR_CONFIG_FILE, LaunchConfig};

/// Overrides the directory the launcher treats as its own location.
pub const HOME_ENV: &str = "OTELCH_HOME";

/// Resolve the launcher directory: `$OTELCH_HOME` when set (relative values
/// are taken from the current directory), otherwise the executable's directory.
pub fn launcher_dir(env: &Environment) -> io::Result<PathBuf> {
    if let Some(home) = env.get(HOME_ENV).filter(|v| !v.is_empty()) {
        return std::path::absolute(home);
    }
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path has no parent: {}", exe.display()),
        )
    })
}

/// Runs the collector once all preconditions hold.
///
/// Order is fixed: runtime check, `.env` loading, credential validation,
/// launch. The first failure aborts and nothing after it runs.
#[derive(Debug)]
pub struct Launcher<R> {
    runtime: R,
    search_paths: Vec<PathBuf>,
    collector_config: PathBuf,
}

impl<R: ContainerRuntime> Launcher<R> {
    pub fn new(runtime: R, launcher_dir: &Path) -> Self {
        Self {
            runtime,
            search_paths: env_file::search_paths(launcher_dir),
            collector_config: launcher_dir.join(COLLECTOR_CONFIG_FILE),
        }
    }

    /// Run the launch sequence against `env`, returning the collector's exit code.
    pub fn run(&self, mut env: Environment) -> Result<i32, LaunchError> {
        self.runtime.ensure_available()?;

        env_file::load(&self.search_paths, &mut env)?;
        let credentials = CredentialSet::from_environment(&env)?;

        let config = LaunchConfig::new(self.collector_config.clone(), credentials);
        info!(
            image = %config.image,
            config = %config.collector_config.display(),
            "launching collector"
        );
        self.runtime.run(&collector_command(&config))
    }

    #[cfg(test)]
    fn runtime(&self) -> &R {
        &self.runtime
    }
}
