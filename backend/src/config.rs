use std::net::SocketAddr;
use std::path::PathBuf;

use venn_core::config::ConfigError;
use venn_core::EditorConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_DIR: &str = "./venn-data";

/// Server settings read from `VENN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub editor: EditorConfig,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("VENN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("VENN_BIND_ADDR {:?}: {}", bind, e)))?;

        let data_dir = PathBuf::from(
            lookup("VENN_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        );

        let editor = match lookup("VENN_EDITOR_CONFIG") {
            Some(path) => EditorConfig::from_json_file(path)?,
            None => EditorConfig::default(),
        };

        Ok(Self {
            bind_addr,
            data_dir,
            editor,
        })
    }
}
