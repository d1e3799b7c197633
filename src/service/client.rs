//! HTTP transport for the PokéAPI: endpoint URLs and typed JSON GETs.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::Error,
    model::api::{DetailDto, EncounterDto, ListingDto},
};

/// Thin JSON client for the PokéAPI.
///
/// Cloning is cheap; the underlying `reqwest::Client` shares its connection pool. No timeout or
/// retry is layered on top of the transport defaults.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first listing page holding `limit` entries.
    pub fn listing_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    pub fn encounters_url(&self, pokemon_id: u32) -> String {
        format!("{}/pokemon/{}/encounters", self.base_url, pokemon_id)
    }

    /// Fetches one listing page by absolute URL.
    pub async fn get_listing(&self, url: &str) -> Result<ListingDto, Error> {
        self.get_json(url).await
    }

    /// Fetches a detail document through the locator the listing handed out.
    pub async fn get_detail(&self, locator: &str) -> Result<DetailDto, Error> {
        self.get_json(locator).await
    }

    pub async fn get_encounters(&self, pokemon_id: u32) -> Result<Vec<EncounterDto>, Error> {
        self.get_json(&self.encounters_url(pokemon_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_without_double_slashes() {
        let client = PokeApiClient::new("http://localhost:8080/api/v2/");

        assert_eq!(client.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(
            client.listing_url(151),
            "http://localhost:8080/api/v2/pokemon?limit=151"
        );
        assert_eq!(
            client.encounters_url(25),
            "http://localhost:8080/api/v2/pokemon/25/encounters"
        );
    }
}
