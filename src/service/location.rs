//! Lazy encounter-location lookup for the detail view.

use dioxus_logger::tracing;

use crate::service::client::PokeApiClient;

pub struct LocationService<'a> {
    client: &'a PokeApiClient,
}

impl<'a> LocationService<'a> {
    /// Creates a new instance of [`LocationService`]
    pub fn new(client: &'a PokeApiClient) -> Self {
        Self { client }
    }

    /// Encounter location names for one entry, in provider order.
    ///
    /// Never fails: a transport or decode error is logged and yields an empty list, which the
    /// detail view renders the same as "no recorded encounters".
    pub async fn fetch_locations(&self, pokemon_id: u32) -> Vec<String> {
        match self.client.get_encounters(pokemon_id).await {
            Ok(encounters) => encounters
                .into_iter()
                .map(|encounter| encounter.location_area.name)
                .filter(|name| !name.is_empty())
                .collect(),
            Err(err) => {
                tracing::warn!("Failed to fetch locations for #{}: {}", pokemon_id, err);
                Vec::new()
            }
        }
    }
}
