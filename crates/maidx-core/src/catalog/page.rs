use serde::Serialize;

/// One page of a filtered catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    /// Requested page (1-indexed), not clamped
    pub page: u32,
    pub total_pages: u32,
    /// Item count across all pages
    pub total_items: usize,
}

impl<T> CatalogPage<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `max(1, ceil(count / page_size))`. A zero page size counts as 1.
pub fn total_pages(count: usize, page_size: usize) -> u32 {
    let pages = count.div_ceil(page_size.max(1)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice out 1-indexed `page`. Pages outside `[1, total_pages]` come back empty.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> CatalogPage<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let start = (page as usize)
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size));
    let page_items = match start {
        Some(start) if start < total_items => items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect(),
        _ => Vec::new(),
    };

    CatalogPage {
        items: page_items,
        page,
        total_pages,
        total_items,
    }
}
