//! Configuration and catalog constants.
//!
//! This module contains:
//! - `Config` - dataset paths and display settings, loaded from TOML
//! - Genre, version and threshold constants used by the classifier and the pipeline
//! - Difficulty slider bounds for the `dsRange` filter

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

/// Dataset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Song metadata array (`SongRecord[]`)
    pub songs: PathBuf,
    /// Chart statistics document (`{ "charts": { ... } }`)
    pub stats: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            songs: PathBuf::from("music_data.json"),
            stats: PathBuf::from("chart_stats.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Songs per catalog page
    pub page_size: usize,
    /// Prefix joined with `basic_info.image_url` to build cover links
    pub cover_base_url: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: display::DEFAULT_PAGE_SIZE,
            cover_base_url: display::COVER_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}

/// Display defaults.
pub mod display {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    pub const COVER_BASE_URL: &str = "https://maimaidx.jp/maimai-mobile/img/Music/";
}

/// Genres excluded from the catalog entirely.
///
/// The dataset spells the banquet category several ways.
pub mod genre {
    pub const BANQUET: [&str; 3] = ["宴会场", "宴会場", "宴會場"];

    pub fn is_banquet(genre: &str) -> bool {
        BANQUET.contains(&genre)
    }
}

/// Release groups (`basic_info.from`) consulted by the classifier.
pub mod version {
    /// Current-generation releases, tagged `xinge` on Master charts.
    pub const NEW_SONG_VERSIONS: [&str; 3] = ["舞萌DX 2023", "舞萌DX 2024", "舞萌DX 2025"];

    /// First-generation releases, tagged `zhenchaoxi` on Master charts.
    pub const ORIGINAL_VERSIONS: [&str; 4] =
        ["maimai", "maimai PLUS", "maimai GreeN", "maimai GreeN PLUS"];

    pub fn is_new_song(from: &str) -> bool {
        NEW_SONG_VERSIONS.contains(&from)
    }

    pub fn is_original(from: &str) -> bool {
        ORIGINAL_VERSIONS.contains(&from)
    }
}

/// Badge thresholds. Values track the current dataset snapshot.
pub mod threshold {
    /// `xiaoge`: ds strictly below this
    pub const XIAOGE_DS_BELOW: f64 = 13.0;

    /// `juezan`: break count strictly above this
    pub const JUEZAN_BREAKS_ABOVE: u32 = 40;
    /// `juezan`: ds at most this
    pub const JUEZAN_DS_MAX: f64 = 14.5;

    /// `slides`: slide share of all notes strictly above this
    pub const SLIDE_RATIO_ABOVE: f64 = 0.2;

    /// `dilei`: fitted difficulty exceeds ds by strictly more than this
    pub const DILEI_FIT_MARGIN: f64 = 0.2;
    /// `dilei`: ds range `[min, max)`
    pub const DILEI_DS_MIN: f64 = 12.0;
    pub const DILEI_DS_BELOW: f64 = 14.0;

    /// `xingxing`: total notes strictly above this
    pub const XINGXING_NOTES_ABOVE: u32 = 1000;

    /// `duijue`: ds strictly above this
    pub const DUIJUE_DS_ABOVE: f64 = 14.5;
}

/// Difficulty slider bounds for the `dsRange` filter.
pub mod ds_range {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 15.0;
    pub const STEP: f64 = 0.1;

    /// Finite and within `[MIN, MAX]`
    pub fn contains(value: f64) -> bool {
        (MIN..=MAX).contains(&value)
    }

    /// Round to the nearest slider step
    pub fn snap(value: f64) -> f64 {
        (value / STEP).round() / STEP.recip()
    }
}
