use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("no index.html in {0}, build the frontend first")]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dist_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `SITE_DIST_DIR` and `BIND_ADDR`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SITE_DIST_DIR").ok(), env::var("BIND_ADDR").ok())
    }

    pub fn from_values(dist_dir: Option<String>, bind_addr: Option<String>) -> Result<Self, ConfigError> {
        let dist_dir = PathBuf::from(dist_dir.unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()));
        let bind_value = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind_value.clone(), source })?;

        let config = Config { dist_dir, bind_addr };
        if !config.index_file().is_file() {
            return Err(ConfigError::MissingIndex(config.dist_dir));
        }
        Ok(config)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_with_index() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        dir
    }

    #[test]
    fn defaults_apply_to_bind_addr() {
        let dir = dist_with_index();
        let config = Config::from_values(Some(dir.path().display().to_string()), None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.index_file(), dir.path().join("index.html"));
    }

    #[test]
    fn missing_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_values(Some(dir.path().display().to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingIndex(_)));
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let dir = dist_with_index();
        let err = Config::from_values(
            Some(dir.path().display().to_string()),
            Some("not-an-addr".to_string()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }
}
