//! Server configuration.
//!
//! Values are layered: built-in defaults, then `server.toml` from the
//! platform config directory, then `MEDIATOR_*` environment variables.

use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::paths;

pub const ENV_HOST: &str = "MEDIATOR_HOST";
pub const ENV_PORT: &str = "MEDIATOR_PORT";
pub const ENV_LOG: &str = "MEDIATOR_LOG";

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: LevelFilter,
    /// Also write logs to the rotated file in the cache directory.
    pub log_to_file: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            log_level: LevelFilter::Info,
            log_to_file: true,
        }
    }
}

/// On-disk shape of `server.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
    log_level: Option<String>,
    log_to_file: Option<bool>,
}

impl ServerConfig {
    /// Load defaults, the user's config file (if any) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = paths::config_file() {
            if path.exists() {
                config = config.merge_file(&path)?;
            }
        }
        config.apply_env(|key| std::env::var(key).ok())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&text, path)
    }

    /// Overlay the keys present in `text`. `origin` is only used in errors.
    pub fn merge_toml(mut self, text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(level) = file.log_level {
            self.log_level = parse_level(&level)?;
        }
        if let Some(log_to_file) = file.log_to_file {
            self.log_to_file = log_to_file;
        }
        Ok(self)
    }

    /// Overlay `MEDIATOR_*` variables, read through `lookup`.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_HOST,
                value: host.clone(),
            })?;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LOG,
                value: level.clone(),
            })?;
        }
        Ok(self)
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: "log_level",
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn origin() -> PathBuf {
        PathBuf::from("server.toml")
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_to_file);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = ServerConfig::default()
            .merge_toml("port = 8080\nlog_level = \"debug\"\n", &origin())
            .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn env_overrides_toml() {
        let config = ServerConfig::default()
            .merge_toml("port = 8080\nhost = \"0.0.0.0\"\n", &origin())
            .unwrap()
            .apply_env(env(&[(ENV_PORT, "9090"), (ENV_LOG, "warn")]))
            .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::default()
            .apply_env(env(&[(ENV_PORT, "http")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: ENV_PORT, .. }
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ServerConfig::default()
            .merge_toml("colour = \"blue\"\n", &origin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_file_level_is_rejected() {
        let err = ServerConfig::default()
            .merge_toml("log_level = \"loud\"\n", &origin())
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value for log_level: \"loud\"");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ServerConfig::default()
            .merge_file(Path::new("/definitely/not/here/server.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
