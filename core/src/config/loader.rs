use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use log::debug;

use super::GpgwConfig;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GpgwConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| anyhow!("Cannot read config {:?}: {}", path.as_ref(), e))?;
    let config: GpgwConfig = toml::from_str(&content)?;
    debug!("Loaded config from {:?}", path.as_ref());
    Ok(config)
}

/// Defaults when the file does not exist.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<GpgwConfig> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        Ok(GpgwConfig::default())
    }
}

pub fn save_config<P: AsRef<Path>>(config: &GpgwConfig, path: P) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    fs::write(path, toml_str)?;
    Ok(())
}

pub fn default_config_path() -> String {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "gpgw") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        config_path.to_string_lossy().into_owned()
    } else {
        "~/.config/gpgw/config.toml".into()
    }
}
