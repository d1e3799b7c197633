//! Pure view derivation: filter then paginate.
//!
//! Nothing here mutates the roster. The filtered sequence is expressed as indices into the
//! roster so callers can cache it across page changes and re-slice without re-filtering.

use std::{collections::BTreeSet, ops::Range};

use crate::model::RosterEntry;

/// The three AND-combined filter clauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterQuery<'a> {
    /// Case-insensitive substring of the name; empty matches everything.
    pub search_term: &'a str,
    /// Exact, case-sensitive type membership; `None` matches everything.
    pub selected_type: Option<&'a str>,
    pub favorites_only: bool,
    pub favorite_ids: Option<&'a BTreeSet<u32>>,
}

impl FilterQuery<'_> {
    /// Whether `entry` passes every clause. `search_lower` is the lowercased search term.
    fn matches(&self, entry: &RosterEntry, search_lower: &str) -> bool {
        let name_match = search_lower.is_empty() || entry.name.to_lowercase().contains(search_lower);
        let type_match = self
            .selected_type
            .map_or(true, |type_name| entry.has_type(type_name));
        let favorite_match = !self.favorites_only
            || self
                .favorite_ids
                .is_some_and(|favorites| favorites.contains(&entry.id));

        name_match && type_match && favorite_match
    }
}

/// One page of derived output.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<'a> {
    pub items: Vec<&'a RosterEntry>,
    pub total_filtered: usize,
    pub total_pages: usize,
    /// The requested page. A page past the end yields no items.
    pub page: usize,
}

/// Indices of the roster entries passing `query`, in roster order.
pub fn filter_indices(roster: &[RosterEntry], query: &FilterQuery<'_>) -> Vec<usize> {
    let search_lower = query.search_term.to_lowercase();

    roster
        .iter()
        .enumerate()
        .filter(|(_, entry)| query.matches(entry, &search_lower))
        .map(|(index, _)| index)
        .collect()
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps `page` into `1..=total_pages`.
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(count, page_size))
}

/// Range of the filtered sequence covered by `page` (1-based), clamped to `count`.
pub fn page_range(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Slices an already filtered index list into a [`VisiblePage`].
///
/// `page` is not clamped here; only the slice bounds are. Callers that need a valid page number
/// clamp it first with [`clamp_page`].
pub fn slice_page<'a>(
    roster: &'a [RosterEntry],
    filtered: &[usize],
    page: usize,
    page_size: usize,
) -> VisiblePage<'a> {
    let total_filtered = filtered.len();

    VisiblePage {
        items: filtered[page_range(page, page_size, total_filtered)]
            .iter()
            .map(|&index| &roster[index])
            .collect(),
        total_filtered,
        total_pages: total_pages(total_filtered, page_size),
        page,
    }
}

/// Returns `favorite_ids` with `id` added if absent or removed if present.
pub fn toggle_favorite(favorite_ids: &BTreeSet<u32>, id: u32) -> BTreeSet<u32> {
    let mut updated = favorite_ids.clone();
    if !updated.remove(&id) {
        updated.insert(id);
    }
    updated
}

/// Filters `roster` by `query` and returns page `page` of size `page_size`.
pub fn derive_visible<'a>(
    roster: &'a [RosterEntry],
    query: &FilterQuery<'_>,
    page: usize,
    page_size: usize,
) -> VisiblePage<'a> {
    let filtered = filter_indices(roster, query);
    slice_page(roster, &filtered, page, page_size)
}
