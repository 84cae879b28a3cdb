//! Browse command: filter the catalog and print one page.

use anyhow::{Result, bail};
use maidx_core::{
    Config, DsRange, FilterCriteria, ViewState, format_page_console, generate_page_json,
};
use tracing::debug;

use crate::cli::BrowseArgs;
use crate::cli_utils::{self, DataPaths};

pub fn run(paths: &DataPaths, config: &Config, args: &BrowseArgs) -> Result<()> {
    let page_size = args.page_size.unwrap_or(config.display.page_size);
    if page_size == 0 {
        bail!("Page size must be at least 1");
    }

    let catalog = cli_utils::load_catalog(paths)?;

    let mut view = ViewState::new(build_criteria(args));
    for id in &args.expand {
        view.expand(id.as_str());
    }
    debug!("Browsing with {:?}, page size {}", view.criteria(), page_size);

    let page = catalog.query(view.criteria(), page_size);
    let cover_base_url = &config.display.cover_base_url;

    if args.json {
        println!(
            "{}",
            generate_page_json(&page, &view, catalog.stats(), cover_base_url)?
        );
    } else {
        println!("Query: ?{}", view.query_string());
        println!();
        print!(
            "{}",
            format_page_console(&page, &view, catalog.stats(), cover_base_url)
        );
    }

    Ok(())
}

/// Start from `--query` and apply individual flags on top.
///
/// Any flag that changes a criterion resets the page, so `--page` is applied last.
pub fn build_criteria(args: &BrowseArgs) -> FilterCriteria {
    let mut criteria = args
        .query
        .as_deref()
        .map(FilterCriteria::from_query_str)
        .unwrap_or_default();

    if let Some(search) = &args.search {
        criteria = criteria.with_search_term(search.as_str());
    }
    if let Some(fields) = &args.fields {
        criteria = criteria.with_search_fields(fields.iter().copied());
    }
    if let Some(badges) = &args.badges {
        criteria = criteria.with_badge_filters(badges.iter().copied());
    }
    if args.ds_min.is_some() || args.ds_max.is_some() {
        let current = criteria.ds_range;
        let range = DsRange::new(
            args.ds_min.unwrap_or(current.min),
            args.ds_max.unwrap_or(current.max),
        );
        // Same bounds the codec accepts for dsRange
        if range.is_within_bounds() {
            criteria = criteria.with_ds_range(range);
        } else {
            debug!("Ignoring out-of-bounds ds range {:?}", range);
        }
    }
    if let Some(page) = args.page {
        criteria = criteria.with_page(page.max(1));
    }

    criteria
}
