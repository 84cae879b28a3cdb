use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::badge::{BadgeSet, classify};
use crate::catalog::{CatalogPage, paginate};
use crate::chart::{ChartStatsIndex, SongRecord, Tier};
use crate::config::genre;
use crate::query::{FilterCriteria, SearchField};

/// One tier that survived filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilteredChart {
    pub tier: Tier,
    pub badges: BadgeSet,
}

/// A song with only its surviving tiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredSong<'a> {
    pub song: &'a SongRecord,
    pub charts: Vec<FilteredChart>,
}

/// Run the filter steps (genre, search, per-tier badges and range) without paginating
pub fn filter_songs<'a>(
    songs: &'a [SongRecord],
    stats: &ChartStatsIndex,
    criteria: &FilterCriteria,
) -> Vec<FilteredSong<'a>> {
    let term = criteria.normalized_search_term();

    let searched: Vec<&SongRecord> = songs
        .iter()
        .filter(|song| !genre::is_banquet(song.genre()))
        .filter(|song| match &term {
            Some(term) => matches_search(song, term, criteria),
            None => true,
        })
        .collect();
    let searched_count = searched.len();

    let filtered: Vec<FilteredSong<'a>> = searched
        .into_iter()
        .map(|song| FilteredSong {
            song,
            charts: filter_tiers(song, stats, criteria),
        })
        .filter(|filtered| !filtered.charts.is_empty())
        .collect();

    debug!(
        "Filtered catalog: {} songs -> {} after search -> {} with matching tiers",
        songs.len(),
        searched_count,
        filtered.len()
    );

    filtered
}

/// Filter, then slice out `criteria.page`
pub fn filter_and_paginate<'a>(
    songs: &'a [SongRecord],
    stats: &ChartStatsIndex,
    criteria: &FilterCriteria,
    page_size: usize,
) -> CatalogPage<FilteredSong<'a>> {
    paginate(filter_songs(songs, stats, criteria), criteria.page, page_size)
}

/// Classify every tier of one song without filtering (detail view)
pub fn classify_song<'a>(song: &'a SongRecord, stats: &ChartStatsIndex) -> FilteredSong<'a> {
    FilteredSong {
        song,
        charts: Tier::iter()
            .take(song.charts.len())
            .map(|tier| FilteredChart {
                tier,
                badges: classify(song, tier, stats),
            })
            .collect(),
    }
}

/// Case-insensitive substring match over the enabled fields.
/// `term` must already be trimmed and lowercased. No enabled field means no match.
pub fn matches_search(song: &SongRecord, term: &str, criteria: &FilterCriteria) -> bool {
    criteria.search_fields.iter().any(|field| match field {
        SearchField::Alias => song
            .aliases()
            .iter()
            .any(|alias| contains_ignore_case(alias, term)),
        SearchField::Title => contains_ignore_case(&song.title, term),
        SearchField::Charter => song
            .charts
            .iter()
            .any(|chart| contains_ignore_case(&chart.charter, term)),
    })
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Classified tiers holding all enabled badges and within the ds range
fn filter_tiers(
    song: &SongRecord,
    stats: &ChartStatsIndex,
    criteria: &FilterCriteria,
) -> Vec<FilteredChart> {
    classify_song(song, stats)
        .charts
        .into_iter()
        .filter(|chart| chart.badges.contains_all(&criteria.badge_filters))
        .filter(|chart| {
            song.ds(chart.tier)
                .is_some_and(|ds| criteria.ds_range.contains(ds))
        })
        .collect()
}
