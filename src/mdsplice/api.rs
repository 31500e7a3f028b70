//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for all mdsplice operations, regardless of the UI driving
//! them.
//!
//! It dispatches to the command functions, resolves the effective chunk
//! budget (per-invocation flag beats persisted config, which beats the
//! built-in default), and returns structured `Result<CmdResult>` values.
//! It does no business logic, no terminal output, and no file I/O beyond
//! what the config module does on its behalf.
//!
//! The facade is built once per invocation and holds the loaded config by
//! value; there is no global mutable state anywhere in the library.

use crate::commands;
use crate::config::MdspliceConfig;
use crate::error::Result;
use std::path::PathBuf;

pub struct MdspliceApi {
    config_dir: PathBuf,
    config: MdspliceConfig,
}

impl MdspliceApi {
    pub fn new(config_dir: PathBuf) -> Self {
        let config = MdspliceConfig::load(&config_dir).unwrap_or_default();
        Self { config_dir, config }
    }

    /// Effective chunk budget: flag override > configured value.
    ///
    /// A flag of `Some(0)` counts as unset, mirroring the chunker's own
    /// zero-means-default contract.
    pub fn effective_chunk_bytes(&self, flag: Option<usize>) -> usize {
        match flag {
            Some(n) if n > 0 => n,
            _ => self.config.chunk_bytes,
        }
    }

    pub fn replace_section(
        &self,
        markdown: &str,
        heading: &str,
        replacement: &str,
    ) -> Result<commands::CmdResult> {
        commands::replace::run(markdown, heading, replacement)
    }

    pub fn split(&self, markdown: &str, chunk_bytes: Option<usize>) -> Result<commands::CmdResult> {
        commands::split::run(markdown, self.effective_chunk_bytes(chunk_bytes))
    }

    pub fn limits(&self, chunk_bytes: Option<usize>) -> Result<commands::CmdResult> {
        commands::limits::run(self.effective_chunk_bytes(chunk_bytes))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
