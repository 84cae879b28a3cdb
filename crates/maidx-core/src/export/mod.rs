//! Export formats for catalog pages.

mod console;

pub use console::*;

use serde::Serialize;

use crate::catalog::{CatalogPage, FilteredChart, FilteredSong};
use crate::chart::{ChartStatsIndex, SongRecord};
use crate::error::Result;
use crate::query::ViewState;

#[derive(Debug, Serialize)]
struct PageJson<'a> {
    page: u32,
    total_pages: u32,
    total_songs: usize,
    query: String,
    songs: Vec<SongJson<'a>>,
}

#[derive(Debug, Serialize)]
struct SongJson<'a> {
    id: &'a str,
    title: &'a str,
    artist: &'a str,
    genre: &'a str,
    #[serde(rename = "type")]
    chart_type: &'a str,
    from: &'a str,
    bpm: f64,
    cover_url: String,
    aliases: &'a [String],
    expanded: bool,
    charts: Vec<ChartJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ChartJson<'a> {
    tier: &'static str,
    color: &'static str,
    level: Option<&'a str>,
    ds: Option<f64>,
    old_ds: Option<f64>,
    fit_diff: Option<f64>,
    charter: &'a str,
    notes: &'a [u32],
    total_notes: u32,
    badges: Vec<&'static str>,
}

impl<'a> SongJson<'a> {
    fn new(
        song: &'a SongRecord,
        charts: &[FilteredChart],
        stats: &ChartStatsIndex,
        cover_base_url: &str,
        expanded: bool,
    ) -> Self {
        Self {
            id: &song.id,
            title: &song.title,
            artist: &song.basic_info.artist,
            genre: song.genre(),
            chart_type: &song.chart_type,
            from: song.release_group(),
            bpm: song.basic_info.bpm,
            cover_url: song.cover_url(cover_base_url),
            aliases: song.aliases(),
            expanded,
            charts: charts
                .iter()
                .map(|chart| ChartJson::new(song, chart, stats))
                .collect(),
        }
    }
}

impl<'a> ChartJson<'a> {
    fn new(song: &'a SongRecord, chart: &FilteredChart, stats: &ChartStatsIndex) -> Self {
        let variant = song.chart(chart.tier);
        Self {
            tier: chart.tier.name(),
            color: chart.tier.color_code(),
            level: song.level(chart.tier),
            ds: song.ds(chart.tier),
            old_ds: song.old_ds(chart.tier),
            fit_diff: stats.fit_diff(&song.id, chart.tier),
            charter: variant.map(|v| v.charter.as_str()).unwrap_or_default(),
            notes: variant.map(|v| v.notes.as_slice()).unwrap_or_default(),
            total_notes: variant.map(|v| v.total_notes()).unwrap_or(0),
            badges: chart.badges.iter().map(|badge| badge.key()).collect(),
        }
    }
}

/// Generate a JSON document for one catalog page
pub fn generate_page_json(
    page: &CatalogPage<FilteredSong<'_>>,
    view: &ViewState,
    stats: &ChartStatsIndex,
    cover_base_url: &str,
) -> Result<String> {
    let json = PageJson {
        page: page.page,
        total_pages: page.total_pages,
        total_songs: page.total_items,
        query: view.query_string(),
        songs: page
            .items
            .iter()
            .map(|item| {
                SongJson::new(
                    item.song,
                    &item.charts,
                    stats,
                    cover_base_url,
                    view.is_expanded(&item.song.id),
                )
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Generate a JSON document for one song with every tier classified
pub fn generate_song_json(
    song: &FilteredSong<'_>,
    stats: &ChartStatsIndex,
    cover_base_url: &str,
) -> Result<String> {
    let json = SongJson::new(song.song, &song.charts, stats, cover_base_url, true);
    Ok(serde_json::to_string_pretty(&json)?)
}
