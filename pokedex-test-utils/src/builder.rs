//! Declarative test builder.
//!
//! Tests queue the upstream state they need (listed entries, failing details, encounter
//! endpoints) and `build()` starts the mock server, registers every endpoint and returns a
//! [`TestContext`].

use serde_json::Value;

use crate::{error::TestError, fixtures::pokemon::factory, TestContext};

enum ListedEntry {
    // `id` is the path segment the detail is served under
    Detail { id: u32, name: String, detail: Value },
    Failing { id: u32, name: String, status: usize },
}

impl ListedEntry {
    fn id(&self) -> u32 {
        match self {
            Self::Detail { id, .. } | Self::Failing { id, .. } => *id,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Detail { name, .. } | Self::Failing { name, .. } => name,
        }
    }
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Entries of the first listing page, in listing order
    listed: Vec<ListedEntry>,
    listing_limit: Option<u32>,
    listing_error: Option<(u32, usize)>,
    detail_expected_requests: usize,

    encounter_endpoints: Vec<(u32, Value, usize)>,
    encounter_error_endpoints: Vec<(u32, usize, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            listed: Vec::new(),
            listing_limit: None,
            listing_error: None,
            detail_expected_requests: 1,
            encounter_endpoints: Vec::new(),
            encounter_error_endpoints: Vec::new(),
        }
    }

    /// List ids `1..=count` with generated detail documents.
    ///
    /// Names and types come from [`factory::roster_name`] and [`factory::roster_types`], so a
    /// roster of 151 holds exactly twelve fire-type entries.
    pub fn with_roster(mut self, count: u32) -> Self {
        for id in 1..=count {
            self = self.with_detail(factory::mock_roster_detail(id));
        }
        self
    }

    /// List one entry served by `detail`. `id` and `name` are read from the document.
    pub fn with_detail(self, detail: Value) -> Self {
        let id = detail["id"].as_u64().unwrap_or_default() as u32;
        self.with_detail_at(id, detail)
    }

    /// List one entry served under `/pokemon/{path_id}/`, whatever `id` the document carries.
    ///
    /// Lets two listed entries resolve to documents sharing an id.
    pub fn with_detail_at(mut self, path_id: u32, detail: Value) -> Self {
        let name = detail["name"].as_str().unwrap_or_default().to_string();
        self.listed.push(ListedEntry::Detail {
            id: path_id,
            name,
            detail,
        });
        self
    }

    /// List one entry whose detail endpoint answers with `status`.
    pub fn with_failing_detail(mut self, id: u32, name: &str, status: usize) -> Self {
        self.listed.push(ListedEntry::Failing {
            id,
            name: name.to_string(),
            status,
        });
        self
    }

    /// Override the `limit` query the listing endpoint expects. Defaults to the number of
    /// listed entries.
    pub fn with_listing_limit(mut self, limit: u32) -> Self {
        self.listing_limit = Some(limit);
        self
    }

    /// Make the listing endpoint for `limit` fail with `status`.
    pub fn with_listing_error(mut self, limit: u32, status: usize) -> Self {
        self.listing_error = Some((limit, status));
        self
    }

    /// How often each successful detail endpoint expects to be called. Defaults to 1.
    pub fn expect_detail_requests(mut self, expected_requests: usize) -> Self {
        self.detail_expected_requests = expected_requests;
        self
    }

    pub fn with_encounters_endpoint(
        mut self,
        id: u32,
        location_names: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.encounter_endpoints.push((
            id,
            factory::mock_encounters(location_names),
            expected_requests,
        ));
        self
    }

    pub fn with_encounters_error_endpoint(
        mut self,
        id: u32,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.encounter_error_endpoints
            .push((id, status, expected_requests));
        self
    }

    /// Start the mock server and register every queued endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await;
        let mut mocks = Vec::new();

        if let Some((limit, status)) = self.listing_error {
            mocks.push(
                test.pokemon()
                    .create_listing_error_endpoint(limit, status, 1),
            );
        }

        if !self.listed.is_empty() {
            let entries: Vec<(String, String)> = self
                .listed
                .iter()
                .map(|entry| (entry.name().to_string(), test.detail_url(entry.id())))
                .collect();
            let limit = self.listing_limit.unwrap_or(entries.len() as u32);
            let listing = factory::mock_listing(&entries, entries.len(), None, None);

            mocks.push(test.pokemon().create_listing_endpoint(limit, &listing, 1));

            for entry in self.listed {
                let mock = match entry {
                    ListedEntry::Detail { id, detail, .. } => test.pokemon().create_detail_endpoint(
                        id,
                        &detail,
                        self.detail_expected_requests,
                    ),
                    ListedEntry::Failing { id, status, .. } => {
                        test.pokemon().create_detail_error_endpoint(id, status, 1)
                    }
                };
                mocks.push(mock);
            }
        }

        for (id, encounters, expected_requests) in self.encounter_endpoints {
            mocks.push(
                test.pokemon()
                    .create_encounters_endpoint(id, &encounters, expected_requests),
            );
        }

        for (id, status, expected_requests) in self.encounter_error_endpoints {
            mocks.push(
                test.pokemon()
                    .create_encounters_error_endpoint(id, status, expected_requests),
            );
        }

        test.mocks = mocks;

        Ok(test)
    }
}
