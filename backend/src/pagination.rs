use serde::Serialize;

pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.clamp(1, MAX_PER_PAGE))
}

/// Slices one page out of `rows`. Page numbers start at 1; a page past the
/// end is empty rather than an error.
pub fn paginate<T: Clone>(rows: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let items = rows.iter().skip(start).take(per_page).cloned().collect();
    Page {
        items,
        page,
        per_page,
        total: rows.len(),
        total_pages: total_pages(rows.len(), per_page),
    }
}
