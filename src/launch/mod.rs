// Launch pipeline: derive the collector invocation and run it behind the
// precondition checks.

pub mod commands;
pub mod launcher;
pub mod settings;

pub use commands::collector_command;
pub use launcher::{HOME_ENV, Launcher, launcher_dir};
pub use settings::{LaunchConfig, PortMapping};
