use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// Deployment environment name, reported by the health endpoint
    #[serde(default = "default_environment")]
    pub environment: String,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP/HTTP collector endpoint
    #[serde(default = "default_otel_endpoint")]
    pub endpoint: String,
}

fn default_otel_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_otel_endpoint(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - PORTFOLIO_LISTEN
    /// - PORTFOLIO_SOCKET
    /// - PORTFOLIO_ENVIRONMENT
    /// - PORTFOLIO_OTEL_ENDPOINT
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("PORTFOLIO_").split("_"))
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    environment: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            environment: default_environment(),
            otel: OtelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_| {
            let config = Config::load()?;
            assert_eq!(config.listen, "127.0.0.1:3000");
            assert_eq!(config.environment, "development");
            assert_eq!(config.otel.endpoint, "http://127.0.0.1:4318");
            assert!(config.socket.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "0.0.0.0:8080");
            jail.set_env("PORTFOLIO_ENVIRONMENT", "production");
            jail.set_env("PORTFOLIO_SOCKET", "/run/portfolio.sock");
            jail.set_env("PORTFOLIO_OTEL_ENDPOINT", "http://collector:4318");

            let config = Config::load()?;
            assert_eq!(config.listen, "0.0.0.0:8080");
            assert_eq!(config.environment, "production");
            assert_eq!(config.socket.as_deref(), Some("/run/portfolio.sock"));
            assert_eq!(config.otel.endpoint, "http://collector:4318");
            Ok(())
        });
    }
}
