use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use crate::config::errors::ConfigError;
use crate::config::EnvironmentProvider;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Bootstrap settings for the HTTP listener
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    ///
    /// Missing variables fall back to defaults. Present but invalid values
    /// are rejected rather than silently replaced.
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ConfigError> {
        let server_host = env_provider
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Self::validate_host_address(&server_host)?;

        let server_port = match env_provider.get_var("PORT") {
            Some(value) => Self::parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    fn validate_host_address(value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::invalid_setting("HOST", "must not be empty"));
        }
        if value == "localhost" || value.parse::<IpAddr>().is_ok() {
            Ok(())
        } else {
            Err(ConfigError::invalid_setting(
                "HOST",
                format!("'{}' is not a valid IP address or 'localhost'", value),
            ))
        }
    }

    fn parse_port(value: &str) -> Result<u16, ConfigError> {
        let port: u16 = value
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::parse_error("PORT", e.to_string()))?;
        if port == 0 {
            return Err(ConfigError::invalid_setting("PORT", "must be between 1 and 65535"));
        }
        Ok(port)
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL advertised in the OpenAPI document
    ///
    /// A wildcard bind address is reported as `localhost`.
    pub fn public_url(&self) -> String {
        let host = match self.server_host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            host => host,
        };
        format!("http://{}:{}", host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
