use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chart::Tier;

/// Aggregated play statistics for one song tier.
///
/// Tiers nobody has played appear as `{}` in the dataset, which
/// deserializes to an entry with every field defaulted and no `fit_diff`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStatEntry {
    /// Play count
    pub cnt: f64,
    /// Level label the statistics were grouped under
    pub diff: String,
    /// Difficulty fitted from observed results
    pub fit_diff: Option<f64>,
    /// Average achievement percentage
    pub avg: f64,
    /// Average DX score
    pub avg_dx: f64,
    pub std_dev: f64,
    /// Rank distribution histogram
    pub dist: Vec<f64>,
    /// Full-combo distribution histogram
    pub fc_dist: Vec<f64>,
}

/// Chart statistics keyed by song id, then tier index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartStatsIndex {
    #[serde(default)]
    pub charts: HashMap<String, Vec<ChartStatEntry>>,
}

impl ChartStatsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, song_id: impl Into<String>, entries: Vec<ChartStatEntry>) {
        self.charts.insert(song_id.into(), entries);
    }

    pub fn get(&self, song_id: &str, tier: Tier) -> Option<&ChartStatEntry> {
        self.charts
            .get(song_id)
            .and_then(|entries| entries.get(tier.index()))
    }

    /// Fitted difficulty for a tier, `None` when no statistics were recorded
    pub fn fit_diff(&self, song_id: &str, tier: Tier) -> Option<f64> {
        self.get(song_id, tier).and_then(|stat| stat.fit_diff)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stats_with_empty_entries() {
        let json = r#"{
            "charts": {
                "834": [
                    {},
                    {"cnt": 120.0, "diff": "8+", "fit_diff": 8.41, "avg": 98.2, "avg_dx": 800.5,
                     "std_dev": 2.1, "dist": [0, 1, 2], "fc_dist": [10, 5]},
                    {}
                ]
            }
        }"#;
        let stats: ChartStatsIndex = serde_json::from_str(json).unwrap();
        assert_eq!(stats.len(), 1);

        let empty = stats.get("834", Tier::Basic).unwrap();
        assert_eq!(empty.fit_diff, None);
        assert_eq!(stats.fit_diff("834", Tier::Basic), None);

        assert_eq!(stats.fit_diff("834", Tier::Advanced), Some(8.41));
        assert_eq!(stats.get("834", Tier::Advanced).unwrap().diff, "8+");

        // Past the recorded tiers
        assert!(stats.get("834", Tier::Master).is_none());
        // Unknown song
        assert!(stats.get("999", Tier::Basic).is_none());
    }

    #[test]
    fn test_empty_document() {
        let stats: ChartStatsIndex = serde_json::from_str("{}").unwrap();
        assert!(stats.is_empty());
    }
}
