//! Per-environment settings, loaded from a JSON configuration file.

use color_eyre::{Result, eyre::ContextCompat as _};

/// The whole configuration document. One section per deployment environment, all optional; only
/// the selected section has to be present.
#[derive(serde::Deserialize)]
pub struct Document {
    /// Settings for a database running on this machine.
    local: Option<Section>,
    /// Settings for the shared development database.
    development: Option<Section>,
    /// Settings for the production database.
    production: Option<Section>,
}

/// The settings for a single environment.
#[derive(serde::Deserialize)]
pub struct Section {
    /// Connection parameters for the score database.
    pub database: Database,
}

/// Connection parameters, handed verbatim to the score provider. Doesn't implement `Debug`:
/// credentials must never end up in logs.
#[derive(serde::Deserialize)]
pub struct Database {
    /// The host the database server runs on.
    pub host: String,
    /// The port the database server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The user to connect as.
    pub user: String,
    /// The user's password.
    pub password: String,
    /// The name of the database holding the show data.
    pub database: String,
}

/// The conventional MySQL port.
const fn default_port() -> u16 {
    3306
}

impl std::fmt::Debug for Section {
    /// Hand-written so `Section` is printable without requiring `Database: Debug`, which is
    /// deliberately absent to keep credentials out of logs.
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Section").finish_non_exhaustive()
    }
}

impl Document {
    /// Read and parse the configuration file.
    pub fn read(path: &std::path::Path) -> Result<Self> {
        tracing::info!("Loading configuration from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Select the section for the given environment.
    pub fn section(&self, environment: crate::config::Environment) -> Result<&Section> {
        let maybe_section = match environment {
            crate::config::Environment::Local => self.local.as_ref(),
            crate::config::Environment::Development => self.development.as_ref(),
            crate::config::Environment::Production => self.production.as_ref(),
        };
        maybe_section.with_context(|| {
            format!(
                "Missing '{}' section in the configuration file",
                environment.key()
            )
        })
    }
}
