pub mod loader;

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::default_constants::LOG_LEVEL;
use crate::locator::{BinaryLocator, Executable};
use crate::platform::Platform;

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct GpgwConfig {
    pub executable_config: ExecutableConfig,
    pub log_config: LogConfig,
}

/// Empty strings mean "auto-detect" and "GnuPG's default home".
#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct ExecutableConfig {
    pub gpg_executable: String,
    pub home_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LOG_LEVEL.into() }
    }
}

impl ExecutableConfig {
    /// Configured binary if set, otherwise the first candidate for `platform`.
    pub fn resolve_executable(&self, platform: Platform) -> Option<Executable> {
        let configured = self.gpg_executable.trim();
        if configured.is_empty() {
            return BinaryLocator::new(platform).resolve();
        }
        let executable = Executable::parse(configured);
        if executable.is_none() {
            warn!("Configured GnuPG binary '{}' does not exist", configured);
        }
        executable
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        let home = self.home_dir.trim();
        if home.is_empty() {
            None
        } else {
            Some(PathBuf::from(home))
        }
    }
}
