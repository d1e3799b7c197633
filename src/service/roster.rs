//! Roster loading.
//!
//! A load fetches one listing page, then every detail document it references, normalizes each
//! document and aggregates the distinct type labels. Detail requests go out in batches of at
//! most `max_concurrent_fetches`; each batch is a join-all barrier and results are assembled
//! by position, so the roster keeps listing order regardless of completion order.

use std::collections::HashSet;

use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    config::{Config, DetailFailurePolicy},
    error::Error,
    model::{api::NamedResourceDto, RosterEntry, TypeFacets},
    service::{client::PokeApiClient, normalize::normalize_entry},
};

/// Result of a bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadedRoster {
    /// Listing order.
    pub entries: Vec<RosterEntry>,
    pub type_facets: TypeFacets,
    /// Listing names dropped under [`DetailFailurePolicy::Skip`].
    pub skipped: Vec<String>,
}

/// One listing page loaded by URL, with the provider's navigation links.
#[derive(Debug, Clone, Default)]
pub struct RosterPage {
    pub entries: Vec<RosterEntry>,
    pub type_facets: TypeFacets,
    pub skipped: Vec<String>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

pub struct RosterService<'a> {
    client: &'a PokeApiClient,
    max_concurrent_fetches: usize,
    failure_policy: DetailFailurePolicy,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(
        client: &'a PokeApiClient,
        max_concurrent_fetches: usize,
        failure_policy: DetailFailurePolicy,
    ) -> Self {
        Self {
            client,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
            failure_policy,
        }
    }

    pub fn from_config(client: &'a PokeApiClient, config: &Config) -> Self {
        Self::new(
            client,
            config.max_concurrent_fetches,
            config.detail_failure_policy,
        )
    }

    /// Loads the first `limit` entries of the roster.
    ///
    /// # Returns
    /// - `Ok(LoadedRoster)` - Entries in listing order with their sorted type facets
    /// - `Err(Error)` - The listing failed, or a detail failed under [`DetailFailurePolicy::Abort`]
    pub async fn load_roster(&self, limit: u32) -> Result<LoadedRoster, Error> {
        let url = self.client.listing_url(limit);
        tracing::info!("Loading roster of {} entries", limit);

        let listing = self.client.get_listing(&url).await?;
        let (entries, skipped) = self.load_details(&listing.results).await?;
        let type_facets = TypeFacets::from_entries(&entries);

        tracing::info!(
            "Loaded {} entries with {} distinct types ({} skipped)",
            entries.len(),
            type_facets.len(),
            skipped.len()
        );

        Ok(LoadedRoster {
            entries,
            type_facets,
            skipped,
        })
    }

    /// Loads a single listing page by absolute URL, following the provider's `next`/`previous`
    /// links.
    pub async fn load_roster_page(&self, url: &str) -> Result<RosterPage, Error> {
        let listing = self.client.get_listing(url).await?;
        let (entries, skipped) = self.load_details(&listing.results).await?;

        Ok(RosterPage {
            type_facets: TypeFacets::from_entries(&entries),
            entries,
            skipped,
            next: listing.next,
            previous: listing.previous,
        })
    }

    async fn load_details(
        &self,
        items: &[NamedResourceDto],
    ) -> Result<(Vec<RosterEntry>, Vec<String>), Error> {
        let mut entries = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        let mut seen_ids = HashSet::with_capacity(items.len());

        for chunk in items.chunks(self.max_concurrent_fetches) {
            let futures: Vec<_> = chunk
                .iter()
                .map(|item| async move {
                    let detail = self.client.get_detail(&item.url).await?;
                    normalize_entry(detail)
                })
                .collect();

            let results = join_all(futures).await;

            for (item, result) in chunk.iter().zip(results) {
                let result = result.and_then(|entry| {
                    if seen_ids.insert(entry.id) {
                        Ok(entry)
                    } else {
                        Err(Error::MalformedEntry {
                            name: entry.name,
                            reason: format!("duplicate id {}", entry.id),
                        })
                    }
                });

                match (result, self.failure_policy) {
                    (Ok(entry), _) => entries.push(entry),
                    (Err(err), DetailFailurePolicy::Abort) => {
                        tracing::error!("Failed to load {}: {}", item.name, err);
                        return Err(err);
                    }
                    (Err(err), DetailFailurePolicy::Skip) => {
                        tracing::warn!("Skipping {}: {}", item.name, err);
                        skipped.push(item.name.clone());
                    }
                }
            }
        }

        Ok((entries, skipped))
    }
}
