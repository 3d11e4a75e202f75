use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// DSN used by `--mock`: a private in-memory `SQLite` database.
pub const MOCK_DSN: &str = "sqlite::memory:";

/// Effective server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite://...` or `postgres://...`
    pub dsn: String,
    pub max_conns: u32,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://video_games.db?mode=rwc".to_owned(),
            max_conns: 10,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.dsn.starts_with("sqlite:") && self.dsn.contains(":memory:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Command-line values that win over every other configuration layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if any), then `APP__*`
    /// environment variables (`__` separates nested keys).
    ///
    /// # Errors
    /// Returns an error when a layer cannot be parsed or a value has the wrong type.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("APP__").split("__"))
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr.set_port(port);
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if cli.mock {
            MOCK_DSN.clone_into(&mut self.database.dsn);
        }
    }

    /// Checks that cannot be expressed through serde types alone.
    ///
    /// # Errors
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let dsn = self.database.dsn.trim();
        if dsn.is_empty() {
            anyhow::bail!("database.dsn must not be empty");
        }
        let supported = ["sqlite:", "postgres:", "postgresql:"];
        if !supported.iter().any(|scheme| dsn.starts_with(scheme)) {
            anyhow::bail!("database.dsn has an unsupported scheme (expected sqlite or postgres)");
        }
        if self.database.max_conns == 0 {
            anyhow::bail!("database.max_conns must be at least 1");
        }
        if self.logging.level.trim().is_empty() {
            anyhow::bail!("logging.level must not be empty");
        }
        Ok(())
    }

    /// Pretty JSON rendering used by `--print-config` and `check`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
