use std::process::ExitCode;

use anyhow::{Context, Result};

use otelch::config::Environment;
use otelch::docker::DockerCli;
use otelch::launch::{Launcher, launcher_dir};

fn main() -> ExitCode {
    otelch::logging::init();

    match run() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<i32> {
    // The only read of the process environment; everything below gets a copy.
    let env = Environment::from_process();
    let dir = launcher_dir(&env).context("failed to resolve the launcher directory")?;

    let launcher = Launcher::new(DockerCli, &dir);
    let code = launcher.run(env)?;
    Ok(code)
}
