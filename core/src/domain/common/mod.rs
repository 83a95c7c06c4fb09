use chrono::{DateTime, SecondsFormat, Utc};

pub mod entities;
pub mod pagination;
pub mod services;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    /// Full connection string, takes precedence over the individual parts.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
        }
    }
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Renders a timestamp the way every API record exposes it: `2024-05-01T12:00:00Z`.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
