//! Query-string form of `FilterCriteria`.
//!
//! Every parameter is optional and omitted when it holds its default, so the
//! default criteria serialize to an empty string. Malformed values fall back
//! to the parameter's default instead of failing the whole parse.

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::debug;
use url::form_urlencoded;

use crate::badge::Badge;
use crate::query::{DsRange, FilterCriteria, SearchField};

/// Query parameter names
pub mod param {
    pub const PAGE: &str = "page";
    pub const SEARCH_TERM: &str = "searchTerm";
    pub const SEARCH_FIELDS: &str = "searchFields";
    pub const BADGE_FILTERS: &str = "badgeFilters";
    pub const DS_RANGE: &str = "dsRange";
}

const LIST_SEPARATOR: char = ',';

impl FilterCriteria {
    /// Serialize to `application/x-www-form-urlencoded`, without a leading `?`
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if self.page != 1 {
            serializer.append_pair(param::PAGE, &self.page.to_string());
        }
        if !self.search_term.is_empty() {
            serializer.append_pair(param::SEARCH_TERM, &self.search_term);
        }
        if self.search_fields != SearchField::all() {
            serializer.append_pair(
                param::SEARCH_FIELDS,
                &join_keys(self.search_fields.iter().map(SearchField::key)),
            );
        }
        if !self.badge_filters.is_empty() {
            serializer.append_pair(
                param::BADGE_FILTERS,
                &join_keys(self.badge_filters.iter().map(Badge::key)),
            );
        }
        if !self.ds_range.is_default() {
            serializer.append_pair(
                param::DS_RANGE,
                &format!("{},{}", self.ds_range.min, self.ds_range.max),
            );
        }

        serializer.finish()
    }

    /// Parse a query string. A leading `?` is accepted; unknown parameters are
    /// ignored and, for repeated parameters, the first occurrence wins.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut criteria = Self::default();
        let mut seen: BTreeSet<String> = BTreeSet::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !seen.insert(key.to_string()) {
                continue;
            }
            match &*key {
                param::PAGE => criteria.page = parse_page(&value),
                param::SEARCH_TERM => criteria.search_term = value.into_owned(),
                param::SEARCH_FIELDS => {
                    criteria.search_fields = parse_key_set(&value).unwrap_or_else(|| {
                        debug!("Ignoring malformed {}: {:?}", param::SEARCH_FIELDS, value);
                        SearchField::all()
                    });
                }
                param::BADGE_FILTERS => {
                    criteria.badge_filters = parse_key_set(&value).unwrap_or_else(|| {
                        debug!("Ignoring malformed {}: {:?}", param::BADGE_FILTERS, value);
                        BTreeSet::new()
                    });
                }
                param::DS_RANGE => {
                    criteria.ds_range = parse_ds_range(&value).unwrap_or_else(|| {
                        debug!("Ignoring malformed {}: {:?}", param::DS_RANGE, value);
                        DsRange::default()
                    });
                }
                _ => {}
            }
        }

        criteria
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(",")
}

fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}

/// An empty value is the empty set; any unknown key rejects the whole list
fn parse_key_set<T: FromStr + Ord>(value: &str) -> Option<BTreeSet<T>> {
    if value.is_empty() {
        return Some(BTreeSet::new());
    }
    value
        .split(LIST_SEPARATOR)
        .map(|key| T::from_str(key.trim()).ok())
        .collect()
}

fn parse_ds_range(value: &str) -> Option<DsRange> {
    let (min, max) = value.split_once(LIST_SEPARATOR)?;
    let range = DsRange::new(min.trim().parse().ok()?, max.trim().parse().ok()?);
    range.is_within_bounds().then_some(range)
}
