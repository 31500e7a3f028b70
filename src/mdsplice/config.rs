use crate::chunk::DEFAULT_CHUNK_BYTES;
use crate::error::{MdspliceError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for mdsplice, stored as config.json in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MdspliceConfig {
    /// Byte budget for a single chunk emitted by `split`
    #[serde(default = "default_chunk_bytes")]
    pub chunk_bytes: usize,
}

fn default_chunk_bytes() -> usize {
    DEFAULT_CHUNK_BYTES
}

impl Default for MdspliceConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}

impl MdspliceConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MdspliceError::Io)?;
        let config: MdspliceConfig =
            serde_json::from_str(&content).map_err(MdspliceError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MdspliceError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MdspliceError::Serialization)?;
        fs::write(config_path, content).map_err(MdspliceError::Io)?;
        Ok(())
    }

    /// Get a config value by key name
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "chunk-bytes" => Some(self.chunk_bytes.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key name; returns a user-facing message on bad input
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "chunk-bytes" => {
                let parsed: usize = value
                    .parse()
                    .map_err(|_| format!("chunk-bytes must be a positive integer, got: {}", value))?;
                if parsed == 0 {
                    return Err("chunk-bytes must be greater than zero".to_string());
                }
                self.chunk_bytes = parsed;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
