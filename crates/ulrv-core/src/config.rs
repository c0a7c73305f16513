use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How the CLI prints results when no `--json` flag is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Global configuration loaded from `~/.config/ulrv/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UlrvConfig {
    /// Lab registry (TOML, `[[lab]]` tables) used by `verify` when
    /// `--registry` is not given.
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
    /// File of already-recorded ULRs, one per line, for duplicate detection.
    #[serde(default)]
    pub known_ulrs_path: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ulrv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UlrvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UlrvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UlrvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
