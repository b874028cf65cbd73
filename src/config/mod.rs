// Environment layering: process environment, `.env` overrides, credentials.

pub mod credentials;
pub mod env_file;
pub mod environment;

pub use credentials::CredentialSet;
pub use env_file::{ENV_FILE_NAME, search_paths};
pub use environment::Environment;
