pub mod badge;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod query;

pub use badge::{Badge, BadgeSet, classify};
pub use catalog::{
    Catalog, CatalogPage, FilteredChart, FilteredSong, classify_song, filter_and_paginate,
    filter_songs, paginate, total_pages,
};
pub use chart::{BasicInfo, ChartStatEntry, ChartStatsIndex, ChartVariant, SongRecord, Tier};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{format_page_console, format_song_console, generate_page_json, generate_song_json};
pub use query::{DsRange, FilterCriteria, SearchField, ViewState};
