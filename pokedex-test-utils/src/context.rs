//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use pokedex::{
    config::{Config, DetailFailurePolicy},
    service::PokeApiClient,
};

/// Test environment: a mock PokéAPI, a client rooted at it and the mocks to verify.
///
/// ```ignore
/// let test = TestBuilder::new().with_roster(151).build().await?;
///
/// let service = RosterService::from_config(&test.client, &test.config());
/// let roster = service.load_roster(151).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    pub server: ServerGuard,
    pub client: PokeApiClient,
    pub mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = PokeApiClient::new(server.url());

        Self {
            server,
            client,
            mocks: Vec::new(),
        }
    }

    /// Configuration pointed at the mock server with default limits.
    pub fn config(&self) -> Config {
        Config {
            api_base_url: self.server.url(),
            ..Config::default()
        }
    }

    /// Configuration pointed at the mock server with explicit fan-out and failure policy.
    pub fn config_with(
        &self,
        max_concurrent_fetches: usize,
        detail_failure_policy: DetailFailurePolicy,
    ) -> Config {
        Config {
            max_concurrent_fetches,
            detail_failure_policy,
            ..self.config()
        }
    }

    /// Locator the mock listing hands out for `id`.
    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", self.server.url(), id)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
