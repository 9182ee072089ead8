//! Configuration types and loading
//!
//! Defaults match the demo deployment; every value can be
//! overridden from the environment (see [`AppConfig::from_env`]).

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Session and credential configuration
    pub auth: AuthConfig,

    /// Demo data loading
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session lifetime in seconds (also the cookie Max-Age)
    pub session_lifetime_seconds: i64,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
    /// Argon2 memory cost in KiB
    pub password_memory_kib: u32,
    /// Argon2 iteration count
    pub password_iterations: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Load the demo users, workers, jobs and activities at startup
    pub demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            auth: AuthConfig {
                session_lifetime_seconds: 24 * 60 * 60,
                cookie_name: "wf_session".to_string(),
                cookie_secure: false,
                password_memory_kib: 19 * 1024,
                password_iterations: 2,
            },
            seed: SeedConfig { demo_data: true },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = parse_value("PORT", &port)?;
        }

        // Auth
        if let Some(lifetime) = lookup("SESSION_LIFETIME_SECONDS") {
            let seconds: i64 = parse_value("SESSION_LIFETIME_SECONDS", &lifetime)?;
            if seconds <= 0 {
                return Err(ConfigError::InvalidValue {
                    key: "SESSION_LIFETIME_SECONDS".into(),
                    message: "must be positive".into(),
                });
            }
            config.auth.session_lifetime_seconds = seconds;
        }
        if let Some(name) = lookup("SESSION_COOKIE_NAME") {
            config.auth.cookie_name = name;
        }
        if let Some(secure) = lookup("SESSION_COOKIE_SECURE") {
            config.auth.cookie_secure = parse_bool("SESSION_COOKIE_SECURE", &secure)?;
        }
        if let Some(memory) = lookup("PASSWORD_MEMORY_KIB") {
            config.auth.password_memory_kib = parse_value("PASSWORD_MEMORY_KIB", &memory)?;
        }
        if let Some(iterations) = lookup("PASSWORD_ITERATIONS") {
            config.auth.password_iterations = parse_value("PASSWORD_ITERATIONS", &iterations)?;
        }

        // Seed
        if let Some(seed) = lookup("SEED_DEMO_DATA") {
            config.seed.demo_data = parse_bool("SEED_DEMO_DATA", &seed)?;
        }

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.session_lifetime_seconds, 86_400);
        assert!(!config.auth.cookie_secure);
        assert!(config.seed.demo_data);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("SESSION_COOKIE_SECURE", "yes"),
            ("SEED_DEMO_DATA", "0"),
            ("SESSION_LIFETIME_SECONDS", "600"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert!(config.auth.cookie_secure);
        assert!(!config.seed.demo_data);
        assert_eq!(config.auth.session_lifetime_seconds, 600);
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_non_positive_lifetime_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("SESSION_LIFETIME_SECONDS", "0")])).is_err());
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 5000);
    }
}
