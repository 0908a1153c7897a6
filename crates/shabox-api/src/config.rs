//! Daemon configuration with file-based loading.
//!
//! Resolution order for the config file:
//! 1. The path named by the `SHABOX_CONFIG` environment variable
//! 2. `/etc/shabox/shabox.toml`, if it exists
//! 3. Built-in defaults
//!
//! Example file:
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [sqlite]
//! dbfile = "/var/lib/shabox/shabox.db"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file location when `SHABOX_CONFIG` is not set.
const SYSTEM_CONFIG_PATH: &str = "/etc/shabox/shabox.toml";

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sqlite: SqliteConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// SQLite storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Path to the database file. When absent, a file under the OS temp dir
    /// is used so the table persists across requests within one process
    /// (`:memory:` would not, since each connection gets its own database).
    pub dbfile: Option<PathBuf>,
}

impl SqliteConfig {
    /// The database file to open, falling back to the temp-dir default.
    pub fn resolve_dbfile(&self) -> PathBuf {
        self.dbfile
            .clone()
            .unwrap_or_else(|| env::temp_dir().join("shabox.db"))
    }
}

impl DaemonConfig {
    /// Load configuration, following the documented resolution order.
    pub fn load() -> Result<Self> {
        if let Ok(path) = env::var("SHABOX_CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        let system = Path::new(SYSTEM_CONFIG_PATH);
        if system.is_file() {
            return Self::from_file(system);
        }

        Ok(Self::default())
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))
    }
}
