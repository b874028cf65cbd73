use std::fmt;

use crate::error::MissingCredentialError;

use super::Environment;

pub const CLICKHOUSE_HOST: &str = "CLICKHOUSE_HOST";
pub const CLICKHOUSE_PORT: &str = "CLICKHOUSE_PORT";
pub const CLICKHOUSE_USER: &str = "CLICKHOUSE_USER";
pub const CLICKHOUSE_PASSWORD: &str = "CLICKHOUSE_PASSWORD";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED: [&str; 4] = [
    CLICKHOUSE_HOST,
    CLICKHOUSE_PORT,
    CLICKHOUSE_USER,
    CLICKHOUSE_PASSWORD,
];

/// ClickHouse connection parameters handed to the collector.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
}

impl CredentialSet {
    /// Validate that every required variable is present and non-blank.
    ///
    /// Must run after the `.env` file has been applied so file-provided
    /// values count.
    pub fn from_environment(env: &Environment) -> Result<Self, MissingCredentialError> {
        let missing_fields: Vec<&'static str> = REQUIRED
            .into_iter()
            .filter(|key| env.get(key).is_none_or(|v| v.trim().is_empty()))
            .collect();

        if !missing_fields.is_empty() {
            return Err(MissingCredentialError { missing_fields });
        }

        let take = |key: &str| env.get(key).unwrap_or_default().to_string();
        Ok(Self {
            host: take(CLICKHOUSE_HOST),
            port: take(CLICKHOUSE_PORT),
            user: take(CLICKHOUSE_USER),
            password: take(CLICKHOUSE_PASSWORD),
        })
    }

    /// Name/value pairs to export into the collector's environment.
    pub fn env_vars(&self) -> [(&'static str, &str); 4] {
        [
            (CLICKHOUSE_HOST, self.host.as_str()),
            (CLICKHOUSE_PORT, self.port.as_str()),
            (CLICKHOUSE_USER, self.user.as_str()),
            (CLICKHOUSE_PASSWORD, self.password.as_str()),
        ]
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
