//! Launch a local OpenTelemetry Collector container that exports to ClickHouse.
//!
//! The launcher checks that Docker is reachable, layers an optional `.env`
//! file over the process environment, validates the ClickHouse credentials and
//! then runs the collector attached in the foreground.

pub mod config;
pub mod docker;
pub mod error;
pub mod launch;
pub mod logging;

pub use error::{LaunchError, MissingCredentialError, RuntimeUnavailableError};
