use std::fmt;
use std::path::PathBuf;

use crate::config::CredentialSet;

pub const COLLECTOR_IMAGE: &str = "otel/opentelemetry-collector-contrib:0.115.0";
pub const CONTAINER_NAME: &str = "otel-collector";
pub const COLLECTOR_CONFIG_FILE: &str = "otel-collector-config.yaml";
pub const COLLECTOR_CONFIG_TARGET: &str = "/etc/otelcol-contrib/config.yaml";

/// OTLP gRPC and OTLP HTTP receivers.
pub const COLLECTOR_PORTS: [PortMapping; 2] = [
    PortMapping {
        host: 4317,
        container: 4317,
    },
    PortMapping {
        host: 4318,
        container: 4318,
    },
];

/// A published `host:container` TCP port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

impl fmt::Display for PortMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.container)
    }
}

/// Everything needed to start the collector container, derived once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub image: String,
    pub container_name: String,
    pub ports: Vec<PortMapping>,
    /// Absolute path of the collector config on the host.
    pub collector_config: PathBuf,
    /// Where `collector_config` is mounted inside the container.
    pub config_target: String,
    pub credentials: CredentialSet,
}

impl LaunchConfig {
    pub fn new(collector_config: PathBuf, credentials: CredentialSet) -> Self {
        Self {
            image: COLLECTOR_IMAGE.to_string(),
            container_name: CONTAINER_NAME.to_string(),
            ports: COLLECTOR_PORTS.to_vec(),
            collector_config,
            config_target: COLLECTOR_CONFIG_TARGET.to_string(),
            credentials,
        }
    }
}
