// Docker CLI plumbing: availability check, attached runs, exit status mapping.

pub mod engine;
pub mod run;
pub mod types;

pub use engine::{DOCKER, DockerCli, ensure_available};
pub use run::{exit_code, run_attached};
pub use types::{ContainerCommand, ContainerRuntime};
