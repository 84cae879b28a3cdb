use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::badge::Badge;
use crate::config::ds_range;
use crate::error::{Error, Result};

/// Song fields the text search can match against
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Alias,
    Charter,
    Title,
}

impl SearchField {
    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> BTreeSet<Self> {
        Self::iter().collect()
    }
}

/// Inclusive difficulty range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DsRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DsRange {
    fn default() -> Self {
        Self {
            min: ds_range::MIN,
            max: ds_range::MAX,
        }
    }
}

impl DsRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. A range with `min > max` contains nothing.
    pub fn contains(&self, ds: f64) -> bool {
        self.min <= ds && ds <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Both ends finite and within the slider bounds
    pub fn is_within_bounds(&self) -> bool {
        ds_range::contains(self.min) && ds_range::contains(self.max)
    }

    /// Parse one end of a range from user input, snapped to the slider step.
    /// Values outside the slider bounds are rejected.
    pub fn parse_bound(value: &str) -> Result<f64> {
        let ds: f64 = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDifficulty(value.to_string()))?;
        if !ds_range::contains(ds) {
            return Err(Error::InvalidDifficulty(format!(
                "{} (expected {} to {})",
                value,
                ds_range::MIN,
                ds_range::MAX
            )));
        }
        Ok(ds_range::snap(ds))
    }
}

/// Complete filter state for one catalog view.
///
/// Setters return a new value with `page` reset to 1; only `with_page`
/// keeps the other criteria and moves the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub search_fields: BTreeSet<SearchField>,
    pub badge_filters: BTreeSet<Badge>,
    pub ds_range: DsRange,
    /// 1-indexed
    pub page: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_fields: SearchField::all(),
            badge_filters: BTreeSet::new(),
            ds_range: DsRange::default(),
            page: 1,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed, lowercased search term, `None` when blank
    pub fn normalized_search_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.page = 1;
        self
    }

    pub fn with_search_field(mut self, field: SearchField, enabled: bool) -> Self {
        if enabled {
            self.search_fields.insert(field);
        } else {
            self.search_fields.remove(&field);
        }
        self.page = 1;
        self
    }

    pub fn with_search_fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.search_fields = fields.into_iter().collect();
        self.page = 1;
        self
    }

    pub fn with_badge_filter(mut self, badge: Badge, enabled: bool) -> Self {
        if enabled {
            self.badge_filters.insert(badge);
        } else {
            self.badge_filters.remove(&badge);
        }
        self.page = 1;
        self
    }

    pub fn with_badge_filters(mut self, badges: impl IntoIterator<Item = Badge>) -> Self {
        self.badge_filters = badges.into_iter().collect();
        self.page = 1;
        self
    }

    pub fn with_ds_range(mut self, range: DsRange) -> Self {
        self.ds_range = range;
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.search_fields.len(), 3);
        assert!(criteria.badge_filters.is_empty());
        assert!(criteria.ds_range.is_default());
        assert!(criteria.normalized_search_term().is_none());
    }

    #[test]
    fn test_normalized_search_term() {
        let criteria = FilterCriteria::new().with_search_term("  Oshama Scramble!  ");
        assert_eq!(
            criteria.normalized_search_term().as_deref(),
            Some("oshama scramble!")
        );
        let blank = FilterCriteria::new().with_search_term(" \t ");
        assert!(blank.normalized_search_term().is_none());
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(DsRange::parse_bound("13.5").unwrap(), 13.5);
        assert_eq!(DsRange::parse_bound(" 12.34 ").unwrap(), 12.3);
        assert_eq!(DsRange::parse_bound("15").unwrap(), 15.0);

        for input in ["0.5", "20", "NaN", "inf", "-1", "", "abc"] {
            assert!(
                matches!(DsRange::parse_bound(input), Err(Error::InvalidDifficulty(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parsed_bounds_survive_query_string() {
        let range = DsRange::new(
            DsRange::parse_bound("12.75").unwrap(),
            DsRange::parse_bound("14.05").unwrap(),
        );
        let criteria = FilterCriteria::new().with_ds_range(range);
        assert_eq!(
            FilterCriteria::from_query_str(&criteria.to_query_string()),
            criteria
        );
    }

    #[test]
    fn test_setters_reset_page() {
        let base = FilterCriteria::new().with_page(4);
        assert_eq!(base.page, 4);

        assert_eq!(base.clone().with_search_term("x").page, 1);
        assert_eq!(base.clone().with_search_field(SearchField::Alias, false).page, 1);
        assert_eq!(base.clone().with_badge_filter(Badge::Dilei, true).page, 1);
        assert_eq!(base.clone().with_ds_range(DsRange::new(12.0, 13.0)).page, 1);
        assert_eq!(base.with_page(2).page, 2);
    }

    #[test]
    fn test_toggle_fields_and_badges() {
        let criteria = FilterCriteria::new()
            .with_search_field(SearchField::Charter, false)
            .with_badge_filter(Badge::Juezan, true)
            .with_badge_filter(Badge::Slides, true)
            .with_badge_filter(Badge::Juezan, false);
        assert!(!criteria.search_fields.contains(&SearchField::Charter));
        assert_eq!(
            criteria.badge_filters.iter().copied().collect::<Vec<_>>(),
            vec![Badge::Slides]
        );
    }

    #[test]
    fn test_ds_range_contains() {
        let range = DsRange::new(12.5, 13.5);
        assert!(range.contains(12.5));
        assert!(range.contains(13.5));
        assert!(!range.contains(13.6));

        let inverted = DsRange::new(14.0, 13.0);
        assert!(!inverted.contains(13.5));
        assert!(inverted.is_within_bounds());

        assert!(!DsRange::new(0.5, 13.0).is_within_bounds());
        assert!(!DsRange::new(f64::NAN, 13.0).is_within_bounds());
    }
}
