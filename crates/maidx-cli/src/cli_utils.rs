//! Common CLI utility functions shared across commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use maidx_core::{Catalog, Config};
use tracing::{debug, info, warn};

/// Dataset paths after applying CLI overrides to the config
pub struct DataPaths {
    pub songs: PathBuf,
    pub stats: PathBuf,
}

impl DataPaths {
    pub fn resolve(songs: Option<PathBuf>, stats: Option<PathBuf>, config: &Config) -> Self {
        Self {
            songs: songs.unwrap_or_else(|| config.data.songs.clone()),
            stats: stats.unwrap_or_else(|| config.data.stats.clone()),
        }
    }
}

/// Load config, falling back to defaults when the file is missing or invalid.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Load the song and statistics datasets.
pub fn load_catalog(paths: &DataPaths) -> Result<Catalog> {
    let catalog = Catalog::load(&paths.songs, &paths.stats).with_context(|| {
        format!(
            "Failed to load datasets ({} / {})",
            paths.songs.display(),
            paths.stats.display()
        )
    })?;
    if catalog.skipped() > 0 {
        warn!(
            "{} songs skipped for incomplete tier data",
            catalog.skipped()
        );
    }
    Ok(catalog)
}
