//! End-to-end tests for the `otelch` binary.
//!
//! The Unix tests put a fake `docker` script first on `PATH` so the whole
//! launch sequence runs without a daemon. Tests marked `#[ignore]` need a real
//! Docker daemon; run with: `cargo test -- --ignored`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use otelch::config::Environment;
use otelch::docker::{self, DockerCli};
use otelch::launch::{HOME_ENV, Launcher};
use otelch::LaunchError;

const CREDENTIALS: [(&str, &str); 4] = [
    ("CLICKHOUSE_HOST", "ch.example"),
    ("CLICKHOUSE_PORT", "9000"),
    ("CLICKHOUSE_USER", "otel"),
    ("CLICKHOUSE_PASSWORD", "s3cret"),
];

/// Run the launcher binary with a scrubbed environment.
fn launch(path: &Path, home: &Path, extra: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_otelch"));
    cmd.env_clear().env("PATH", path).env(HOME_ENV, home);
    for (k, v) in extra {
        cmd.env(k, v);
    }
    cmd.output().expect("failed to run otelch")
}

#[test]
fn missing_runtime_exits_with_one() {
    let empty_path = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();

    let out = launch(empty_path.path(), home.path(), &CREDENTIALS);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("container runtime is unavailable"),
        "stderr: {stderr}"
    );
}

#[cfg(unix)]
mod fake_docker {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    const SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  version) exit 0 ;;
  run)
    printf '%s\n' "$@" > "$FAKE_DOCKER_LOG"
    env | grep '^CLICKHOUSE_' | sort > "$FAKE_DOCKER_LOG.env"
    exit 7 ;;
esac
exit 64
"#;

    /// Install the fake `docker` and return a PATH that resolves it first.
    fn install(dir: &Path) -> PathBuf {
        let bin = dir.join("fakebin");
        std::fs::create_dir(&bin).unwrap();
        let script = bin.join("docker");
        std::fs::write(&script, SCRIPT).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::env::join_paths([bin, PathBuf::from("/usr/bin"), PathBuf::from("/bin")])
            .map(PathBuf::from)
            .unwrap()
    }

    #[test]
    fn launch_mirrors_exit_code_and_forwards_credentials() {
        let root = tempfile::tempdir().unwrap();
        let path = install(root.path());
        let home = root.path().join("launcher");
        std::fs::create_dir(&home).unwrap();
        let log = root.path().join("docker.log");
        let log_str = log.to_str().unwrap();

        let mut extra: Vec<(&str, &str)> = CREDENTIALS.to_vec();
        extra.push(("FAKE_DOCKER_LOG", log_str));
        let out = launch(&path, &home, &extra);

        assert_eq!(out.status.code(), Some(7), "{out:?}");

        let args = std::fs::read_to_string(&log).unwrap();
        let args: Vec<&str> = args.lines().collect();
        assert_eq!(&args[..2], ["run", "--rm"]);
        assert!(args.contains(&"4317:4317"));
        assert!(args.contains(&"4318:4318"));
        assert!(args.contains(&"--config=/etc/otelcol-contrib/config.yaml"));
        assert!(!args.iter().any(|a| a.contains("s3cret")));

        let env = std::fs::read_to_string(root.path().join("docker.log.env")).unwrap();
        assert_eq!(
            env,
            "CLICKHOUSE_HOST=ch.example\n\
             CLICKHOUSE_PASSWORD=s3cret\n\
             CLICKHOUSE_PORT=9000\n\
             CLICKHOUSE_USER=otel\n"
        );
    }

    #[test]
    fn env_file_one_level_up_is_used() {
        let root = tempfile::tempdir().unwrap();
        let path = install(root.path());
        let home = root.path().join("launcher");
        std::fs::create_dir(&home).unwrap();
        let dotenv: String = CREDENTIALS
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        std::fs::write(root.path().join(".env"), format!("# test\n{dotenv}")).unwrap();
        let log = root.path().join("docker.log");
        let log_str = log.to_str().unwrap();

        let out = launch(&path, &home, &[("FAKE_DOCKER_LOG", log_str)]);

        assert_eq!(out.status.code(), Some(7), "{out:?}");
        let env = std::fs::read_to_string(root.path().join("docker.log.env")).unwrap();
        assert!(env.contains("CLICKHOUSE_PASSWORD=s3cret"), "{env}");
    }

    #[test]
    fn unreadable_env_file_aborts_before_docker_run() {
        let root = tempfile::tempdir().unwrap();
        let path = install(root.path());
        let home = root.path().join("launcher");
        std::fs::create_dir(&home).unwrap();
        std::fs::write(home.join(".env"), b"CLICKHOUSE_PASSWORD=caf\xe9\n").unwrap();
        let log = root.path().join("docker.log");
        let log_str = log.to_str().unwrap();

        let mut extra: Vec<(&str, &str)> = CREDENTIALS.to_vec();
        extra.push(("FAKE_DOCKER_LOG", log_str));
        let out = launch(&path, &home, &extra);

        assert_eq!(out.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains("failed to read environment file"),
            "stderr: {stderr}"
        );
        assert!(!log.exists());
    }

    #[test]
    fn missing_credentials_never_reach_docker() {
        let root = tempfile::tempdir().unwrap();
        let path = install(root.path());
        let home = root.path().join("launcher");
        std::fs::create_dir(&home).unwrap();
        let log = root.path().join("docker.log");
        let log_str = log.to_str().unwrap();

        let out = launch(
            &path,
            &home,
            &[("FAKE_DOCKER_LOG", log_str), ("CLICKHOUSE_HOST", "ch")],
        );

        assert_eq!(out.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains(
                "missing required credentials: CLICKHOUSE_PORT, CLICKHOUSE_USER, CLICKHOUSE_PASSWORD"
            ),
            "stderr: {stderr}"
        );
        assert!(!log.exists());
    }
}

#[test]
#[ignore]
fn real_docker_is_available() {
    docker::ensure_available().expect("docker daemon should be reachable");
}

#[test]
#[ignore]
fn real_docker_missing_credentials_are_rejected() {
    let home = tempfile::tempdir().unwrap();
    let launcher = Launcher::new(DockerCli, home.path());

    let err = launcher.run(Environment::new()).unwrap_err();

    assert!(matches!(err, LaunchError::MissingCredentials(_)), "{err:?}");
}
