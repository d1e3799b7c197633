//! The page controller: roster snapshot plus view state.
//!
//! [`PokedexController`] is the whole surface the front-end may call. Any change to a filter
//! input, the favorite set or the roster re-filters and resets to page 1; a page change only
//! re-slices the cached filtered sequence. Favorite and shiny changes are mirrored to the
//! preference store on every change.

use std::collections::BTreeSet;

use dioxus_logger::tracing;

use crate::{
    model::{RosterEntry, TypeFacets},
    service::LoadedRoster,
    state::{
        persistence::{KeyValueStore, Preferences},
        shiny::ShinyState,
        view::{self, FilterQuery, VisiblePage},
    },
};

/// Ephemeral, process-local view inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub selected_type: Option<String>,
    pub favorites_only: bool,
    pub shiny: ShinyState,
    pub favorite_ids: BTreeSet<u32>,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_type: None,
            favorites_only: false,
            shiny: ShinyState::default(),
            favorite_ids: BTreeSet::new(),
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn query(&self) -> FilterQuery<'_> {
        FilterQuery {
            search_term: &self.search_term,
            selected_type: self.selected_type.as_deref(),
            favorites_only: self.favorites_only,
            favorite_ids: Some(&self.favorite_ids),
        }
    }
}

pub struct PokedexController<S> {
    roster: Vec<RosterEntry>,
    type_facets: TypeFacets,
    view: ViewState,
    filtered: Vec<usize>,
    page_size: usize,
    selected: Option<u32>,
    preferences: Preferences<S>,
}

impl<S: KeyValueStore> PokedexController<S> {
    /// Creates an empty controller, restoring favorites and the shiny preference.
    pub fn new(preferences: Preferences<S>, page_size: usize) -> Self {
        let view = ViewState {
            favorite_ids: preferences.load_favorites(),
            shiny: ShinyState::new(preferences.load_shiny()),
            ..Default::default()
        };

        Self {
            roster: Vec::new(),
            type_facets: TypeFacets::default(),
            view,
            filtered: Vec::new(),
            page_size: page_size.max(1),
            selected: None,
            preferences,
        }
    }

    /// Replaces the roster snapshot.
    pub fn set_roster(&mut self, loaded: LoadedRoster) {
        self.roster = loaded.entries;
        self.type_facets = loaded.type_facets;
        self.selected = None;
        self.refilter();
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn type_facets(&self) -> &TypeFacets {
        &self.type_facets
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.view.search_term = search_term.into();
        self.refilter();
    }

    /// `None` (or an empty string from a select control) clears the type filter.
    pub fn set_selected_type(&mut self, selected_type: Option<String>) {
        self.view.selected_type = selected_type.filter(|t| !t.is_empty());
        self.refilter();
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.view.favorites_only = favorites_only;
        self.refilter();
    }

    /// Adds or removes `id` from the favorite set and persists the whole set.
    pub fn toggle_favorite(&mut self, id: u32) -> &BTreeSet<u32> {
        self.view.favorite_ids = view::toggle_favorite(&self.view.favorite_ids, id);

        if let Err(e) = self.preferences.save_favorites(&self.view.favorite_ids) {
            tracing::error!("Failed to persist favorites: {}", e);
        }

        self.refilter();
        &self.view.favorite_ids
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.view.favorite_ids.contains(&id)
    }

    /// Sets the global shiny preference, clearing per-card overrides.
    pub fn set_shiny_global(&mut self, shiny: bool) {
        self.view.shiny.set_global(shiny);

        if let Err(e) = self.preferences.save_shiny(shiny) {
            tracing::error!("Failed to persist shiny preference: {}", e);
        }
    }

    pub fn shiny_global(&self) -> bool {
        self.view.shiny.global()
    }

    /// Flips one card's shiny display without touching the global preference.
    pub fn toggle_card_shiny(&mut self, id: u32) {
        self.view.shiny.toggle(id);
    }

    pub fn is_shiny(&self, id: u32) -> bool {
        self.view.shiny.is_shiny(id)
    }

    /// Moves to `page`, clamped to the available pages. Filters are left untouched.
    pub fn set_page(&mut self, page: usize) {
        self.view.current_page = view::clamp_page(page, self.filtered.len(), self.page_size);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.view.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.view.current_page.saturating_sub(1));
    }

    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered.len(), self.page_size)
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered.len()
    }

    /// The current page of the filtered roster.
    pub fn visible(&self) -> VisiblePage<'_> {
        view::slice_page(
            &self.roster,
            &self.filtered,
            self.view.current_page,
            self.page_size,
        )
    }

    /// Opens the detail view for `id` if it is in the roster.
    pub fn select_entry(&mut self, id: u32) {
        self.selected = self.roster.iter().any(|e| e.id == id).then_some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_entry(&self) -> Option<&RosterEntry> {
        let id = self.selected?;
        self.roster.iter().find(|e| e.id == id)
    }

    /// Caches lazily fetched encounter locations on the entry.
    pub fn attach_locations(&mut self, id: u32, locations: Vec<String>) {
        if let Some(entry) = self.roster.iter_mut().find(|e| e.id == id) {
            entry.locations = Some(locations);
        }
    }

    fn refilter(&mut self) {
        self.view.current_page = 1;
        self.filtered = view::filter_indices(&self.roster, &self.view.query());
    }
}
