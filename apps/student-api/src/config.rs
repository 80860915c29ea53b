//! Runtime configuration read from the environment

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings for one run of the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// PostgreSQL URL; the in-memory repository is used when unset
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub json_logs: bool,
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("STUDENT_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("STUDENT_API_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("STUDENT_API_PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'")
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let json_logs = lookup("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            json_logs,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
