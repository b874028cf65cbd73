use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus};

use super::engine::DOCKER;
use super::types::ContainerCommand;

/// Exit code reported when the child status cannot be expressed as `0..=255`.
const FALLBACK_EXIT_CODE: i32 = 1;

/// Run `docker` with inherited stdio and block until it exits.
///
/// `cmd.envs` are added to the child's environment. While waiting, a
/// terminal interrupt is left to `docker` (which stops the container) instead
/// of killing the launcher.
pub fn run_attached(cmd: &ContainerCommand) -> io::Result<ExitStatus> {
    run_program(DOCKER.as_ref(), cmd)
}

fn run_program(program: &OsStr, cmd: &ContainerCommand) -> io::Result<ExitStatus> {
    let mut command = Command::new(program);
    command
        .args(&cmd.args)
        .envs(cmd.envs.iter().map(|(k, v)| (k, v)));

    // Ignore SIGINT before the child exists so no interrupt can slip in
    // between spawn and wait; the child gets the original disposition back.
    let guard = InterruptGuard::install();
    guard.restore_in_child(&mut command);

    command.spawn()?.wait()
}

/// Map a child exit status to the launcher's own exit code, shell style:
/// the child's code, or `128 + signal` when it was killed by a signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return if (0..=255).contains(&code) {
            code
        } else {
            FALLBACK_EXIT_CODE
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    FALLBACK_EXIT_CODE
}

/// Ignores `SIGINT` for its lifetime and restores the previous handler on drop.
struct InterruptGuard {
    #[cfg(unix)]
    previous: Option<libc::sighandler_t>,
}

impl InterruptGuard {
    #[cfg(unix)]
    fn install() -> Self {
        // SAFETY: signal() only swaps the process-wide SIGINT disposition; SIG_IGN
        // needs no handler code to run.
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self {
            previous: (previous != libc::SIG_ERR).then_some(previous),
        }
    }

    #[cfg(not(unix))]
    fn install() -> Self {
        Self {}
    }

    /// Make `command` start with the disposition that was in place before
    /// the guard, instead of inheriting the ignore.
    #[cfg(unix)]
    fn restore_in_child(&self, command: &mut Command) {
        use std::os::unix::process::CommandExt;

        let disposition = self.previous.unwrap_or(libc::SIG_DFL);
        // SAFETY: the hook runs between fork and exec and only calls signal(),
        // which is async-signal-safe.
        unsafe {
            command.pre_exec(move || {
                libc::signal(libc::SIGINT, disposition);
                Ok(())
            });
        }
    }

    #[cfg(not(unix))]
    fn restore_in_child(&self, _command: &mut Command) {}
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            if let Some(previous) = self.previous {
                // SAFETY: restores the disposition returned by the matching signal() call.
                unsafe {
                    libc::signal(libc::SIGINT, previous);
                }
            }
        }
    }
}
