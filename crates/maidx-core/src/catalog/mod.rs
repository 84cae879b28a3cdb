//! Catalog loading, filtering and pagination.
//!
//! - `Catalog` - the two datasets, loaded once and read-only afterwards
//! - `filter_songs`, `filter_and_paginate` - the filter pipeline
//! - `CatalogPage`, `paginate` - page slicing

mod page;
mod pipeline;

pub use page::*;
pub use pipeline::*;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::chart::{ChartStatsIndex, SongRecord};
use crate::error::{Error, Result};
use crate::query::FilterCriteria;

/// Song and statistics datasets
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<SongRecord>,
    stats: ChartStatsIndex,
    skipped: usize,
}

impl Catalog {
    /// Build a catalog, dropping songs whose tier arrays are not five entries each
    pub fn new(songs: Vec<SongRecord>, stats: ChartStatsIndex) -> Self {
        let total = songs.len();
        let songs: Vec<SongRecord> = songs
            .into_iter()
            .filter(|song| {
                let complete = song.has_complete_tiers();
                if !complete {
                    warn!(
                        "Skipping song {} ({}): {} charts, {} ds, {} levels",
                        song.id,
                        song.title,
                        song.charts.len(),
                        song.ds.len(),
                        song.level.len()
                    );
                }
                complete
            })
            .collect();

        Self {
            skipped: total - songs.len(),
            songs,
            stats,
        }
    }

    /// Load both datasets from JSON files
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(songs_path: P, stats_path: Q) -> Result<Self> {
        let songs_json = fs::read_to_string(songs_path.as_ref())?;
        let stats_json = fs::read_to_string(stats_path.as_ref())?;
        let catalog = Self::from_json_str(&songs_json, &stats_json)?;

        info!(
            "Loaded {} songs from {:?} ({} skipped), statistics for {} songs from {:?}",
            catalog.songs.len(),
            songs_path.as_ref(),
            catalog.skipped,
            catalog.stats.len(),
            stats_path.as_ref()
        );

        Ok(catalog)
    }

    pub fn from_json_str(songs_json: &str, stats_json: &str) -> Result<Self> {
        let songs: Vec<SongRecord> = serde_json::from_str(songs_json)?;
        let stats: ChartStatsIndex = serde_json::from_str(stats_json)?;
        Ok(Self::new(songs, stats))
    }

    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn stats(&self) -> &ChartStatsIndex {
        &self.stats
    }

    /// Songs dropped at load for violating the tier invariant
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn find(&self, song_id: &str) -> Option<&SongRecord> {
        self.songs.iter().find(|song| song.id == song_id)
    }

    pub fn get(&self, song_id: &str) -> Result<&SongRecord> {
        self.find(song_id)
            .ok_or_else(|| Error::SongNotFound(song_id.to_string()))
    }

    pub fn query(&self, criteria: &FilterCriteria, page_size: usize) -> CatalogPage<FilteredSong<'_>> {
        filter_and_paginate(&self.songs, &self.stats, criteria, page_size)
    }
}
