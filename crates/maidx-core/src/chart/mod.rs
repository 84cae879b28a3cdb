//! Chart-related types and data structures.
//!
//! This module contains types for representing the two datasets:
//! - `Tier` - difficulty tiers (Basic, Advanced, Expert, Master, Re:Master)
//! - `SongRecord`, `BasicInfo`, `ChartVariant` - song metadata and per-tier charts
//! - `ChartStatsIndex`, `ChartStatEntry` - aggregated play statistics

mod song;
mod stats;
mod tier;

pub use song::*;
pub use stats::*;
pub use tier::*;
