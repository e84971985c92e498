mod costs;

pub use costs::{
    BuildingMultipliers, ComplianceCosts, CostConfig, ItemRates, OptionalImprovementCosts,
    SafetyThresholds,
};

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cost_table = env::var("SAFETY_COST_TABLE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentSettings { cost_table },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the cost table comes from.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSettings {
    pub cost_table: Option<PathBuf>,
}

impl AssessmentSettings {
    /// Builds the cost table once; falls back to the built-in rates when no
    /// file is configured.
    pub fn cost_config(&self) -> Result<CostConfig, ConfigError> {
        match &self.cost_table {
            Some(path) => CostConfig::from_path(path),
            None => Ok(CostConfig::default()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    CostTableIo {
        path: PathBuf,
        source: std::io::Error,
    },
    CostTableFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidCostTable(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::CostTableIo { path, .. } => {
                write!(f, "unable to read cost table {}", path.display())
            }
            ConfigError::CostTableFormat { path, source } => {
                write!(f, "cost table {} is not valid: {}", path.display(), source)
            }
            ConfigError::InvalidCostTable(reason) => write!(f, "invalid cost table: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidCostTable(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::CostTableIo { source, .. } => Some(source),
            ConfigError::CostTableFormat { source, .. } => Some(source),
        }
    }
}
