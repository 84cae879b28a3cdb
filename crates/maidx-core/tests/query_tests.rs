//! Tests for the query-string codec and view state

use std::collections::BTreeSet;

use maidx_core::{Badge, DsRange, FilterCriteria, SearchField, ViewState};

fn states_reachable_from_ui() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::default(),
        FilterCriteria::new().with_search_term("ＰＡＮＤＯＲＡ paradoxxx"),
        FilterCriteria::new()
            .with_search_term("a&b=c")
            .with_search_field(SearchField::Alias, false),
        FilterCriteria::new().with_search_fields(Vec::<SearchField>::new()),
        FilterCriteria::new()
            .with_badge_filter(Badge::Dilei, true)
            .with_badge_filter(Badge::Juezan, true)
            .with_page(7),
        FilterCriteria::new().with_ds_range(DsRange::new(12.5, 14.0)),
        FilterCriteria::new()
            .with_search_term("ニャイン")
            .with_search_fields([SearchField::Charter])
            .with_badge_filters([Badge::Baipu, Badge::Duijue])
            .with_ds_range(DsRange::new(14.6, 15.0))
            .with_page(2),
    ]
}

#[test]
fn test_reachable_states_survive_query_string() {
    for criteria in states_reachable_from_ui() {
        let query = criteria.to_query_string();
        assert_eq!(
            FilterCriteria::from_query_str(&query),
            criteria,
            "query: {}",
            query
        );
    }
}

#[test]
fn test_parameter_order_and_omission() {
    let criteria = FilterCriteria::new()
        .with_search_term("x")
        .with_badge_filter(Badge::Xiaoge, true)
        .with_page(3);
    assert_eq!(
        criteria.to_query_string(),
        "page=3&searchTerm=x&badgeFilters=xiaoge"
    );
}

#[test]
fn test_malformed_values_fall_back_per_parameter() {
    let criteria = FilterCriteria::from_query_str(
        "page=abc&searchTerm=ok&badgeFilters=dilei,banquet&dsRange=0,99&searchFields=title",
    );
    assert_eq!(criteria.page, 1);
    assert_eq!(criteria.search_term, "ok");
    assert!(criteria.badge_filters.is_empty());
    assert_eq!(criteria.ds_range, DsRange::default());
    assert_eq!(criteria.search_fields, BTreeSet::from([SearchField::Title]));
}

#[test]
fn test_unknown_and_repeated_parameters() {
    let criteria = FilterCriteria::from_query_str("?foo=bar&page=2&page=5&utm_source=x");
    assert_eq!(criteria.page, 2);
    assert_eq!(criteria.to_query_string(), "page=2");
}

#[test]
fn test_setters_reset_page() {
    let base = FilterCriteria::new().with_page(4);
    assert_eq!(base.clone().with_search_term("a").page, 1);
    assert_eq!(base.clone().with_search_field(SearchField::Title, false).page, 1);
    assert_eq!(base.clone().with_badge_filter(Badge::Xinge, true).page, 1);
    assert_eq!(base.clone().with_ds_range(DsRange::new(2.0, 3.0)).page, 1);
    assert_eq!(base.clone().with_page(9).page, 9);
}

#[test]
fn test_view_state_updates_query() {
    let mut view = ViewState::from_query_str("page=3&searchTerm=old");
    view.expand("834");

    let query = view.update(|c| c.with_search_term("new"));
    assert_eq!(query, "searchTerm=new");
    assert_eq!(view.criteria().page, 1);
    // expansion is presentation-only and never serialized
    assert!(view.is_expanded("834"));
    assert!(!view.query_string().contains("834"));

    let query = view.update(|c| c.with_page(2));
    assert_eq!(query, "page=2&searchTerm=new");
}
