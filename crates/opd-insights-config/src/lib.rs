//! Startup configuration for the OPD insights gateway.
//!
//! Everything here is built once before the router exists and never changes
//! afterwards.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const HOST_VAR: &str = "OPD_INSIGHTS_HOST";
pub const PORT_VAR: &str = "OPD_INSIGHTS_PORT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

/// Preflight cache lifetime advertised to browsers.
pub const DEFAULT_CORS_MAX_AGE: Duration = Duration::from_secs(600);

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: expected an IP address")]
    InvalidHost { var: &'static str, value: String },

    #[error("Invalid {var} value {value:?}: expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// CORS
// ─────────────────────────────────────────────────────────────────────────────

/// Either every value is allowed or only the listed ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowList {
    #[default]
    Any,
    Only(Vec<String>),
}

impl AllowList {
    pub fn only<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowList::Only(values.into_iter().map(Into::into).collect())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowList::Any)
    }
}

/// Cross-origin policy applied to every route.
///
/// The default allows any origin, method and header with credentials. That
/// is a development placeholder and must be narrowed before exposing the
/// service to untrusted browsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origins: AllowList,
    pub allow_credentials: bool,
    pub allow_methods: AllowList,
    pub allow_headers: AllowList,
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: AllowList::Any,
            allow_credentials: true,
            allow_methods: AllowList::Any,
            allow_headers: AllowList::Any,
            max_age: DEFAULT_CORS_MAX_AGE,
        }
    }
}

impl CorsConfig {
    /// True when any origin may send credentialed requests.
    pub fn is_wide_open(&self) -> bool {
        self.allow_origins.is_any() && self.allow_credentials
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from defaults plus whatever `lookup` returns for
    /// [`HOST_VAR`] and [`PORT_VAR`]. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(HOST_VAR)) {
            config.host = value.parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = non_blank(lookup(PORT_VAR)) {
            config.port = value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
