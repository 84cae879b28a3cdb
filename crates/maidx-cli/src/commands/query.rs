//! Query command: normalize a query string.

use anyhow::Result;
use maidx_core::FilterCriteria;

/// Parse then re-serialize, dropping defaults, unknown keys and malformed values.
pub fn run(query: &str) -> Result<()> {
    let normalized = FilterCriteria::from_query_str(query).to_query_string();
    println!("?{}", normalized);
    Ok(())
}
