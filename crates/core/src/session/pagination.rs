//! Fixed-size paging over a result set

use std::ops::Range;

use petmatch_domain::constants::PAGE_SIZE;

/// Number of pages needed for `len` records.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range shown on 1-based `page`.
///
/// Out-of-range pages yield an empty range rather than panicking.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}
