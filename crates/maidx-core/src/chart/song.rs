use serde::{Deserialize, Serialize};

use crate::chart::Tier;

/// Release metadata nested under `basic_info` in the song dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: f64,
    /// Release group, e.g. "maimai PLUS" or "舞萌DX 2024"
    pub from: String,
    pub image_url: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub version: String,
}

/// One tier's chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartVariant {
    pub charter: String,
    /// Note counts: tap, hold, slide, (touch,) break. Break is always last.
    pub notes: Vec<u32>,
}

impl ChartVariant {
    /// Index of the slide count in `notes`
    const SLIDE_INDEX: usize = 2;

    pub fn total_notes(&self) -> u32 {
        self.notes.iter().sum()
    }

    pub fn break_count(&self) -> u32 {
        self.notes.last().copied().unwrap_or(0)
    }

    pub fn slide_count(&self) -> Option<u32> {
        self.notes.get(Self::SLIDE_INDEX).copied()
    }

    /// Slide share of all notes, `None` for an empty chart
    pub fn slide_ratio(&self) -> Option<f64> {
        let total = self.total_notes();
        if total == 0 {
            return None;
        }
        self.slide_count()
            .map(|slides| f64::from(slides) / f64::from(total))
    }

    /// Notes joined as "tap/hold/slide/break"
    pub fn notes_display(&self) -> String {
        self.notes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Song metadata with per-tier charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: String,
    pub title: String,
    /// Chart type ("DX" or "SD")
    #[serde(rename = "type", default)]
    pub chart_type: String,
    /// Difficulty constant for each tier
    pub ds: Vec<f64>,
    /// Difficulty constants before the last rebalance
    #[serde(default)]
    pub old_ds: Vec<f64>,
    /// Level label for each tier, e.g. "13+"
    pub level: Vec<String>,
    pub charts: Vec<ChartVariant>,
    pub basic_info: BasicInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

impl SongRecord {
    /// True when `charts`, `ds` and `level` all cover exactly the five tiers
    pub fn has_complete_tiers(&self) -> bool {
        self.charts.len() == Tier::COUNT
            && self.ds.len() == Tier::COUNT
            && self.level.len() == Tier::COUNT
    }

    pub fn ds(&self, tier: Tier) -> Option<f64> {
        self.ds.get(tier.index()).copied()
    }

    pub fn old_ds(&self, tier: Tier) -> Option<f64> {
        self.old_ds.get(tier.index()).copied()
    }

    pub fn level(&self, tier: Tier) -> Option<&str> {
        self.level.get(tier.index()).map(String::as_str)
    }

    pub fn chart(&self, tier: Tier) -> Option<&ChartVariant> {
        self.charts.get(tier.index())
    }

    pub fn aliases(&self) -> &[String] {
        self.alias.as_deref().unwrap_or_default()
    }

    pub fn genre(&self) -> &str {
        &self.basic_info.genre
    }

    pub fn release_group(&self) -> &str {
        &self.basic_info.from
    }

    pub fn cover_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.basic_info.image_url)
    }
}
