//! PokéAPI mock endpoint creation utilities.
//!
//! Each method registers an endpoint on the mockito server that verifies it was called exactly
//! `expected_requests` times once `TestContext::assert_mocks` runs.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::pokemon::PokemonFixtures;

impl<'a> PokemonFixtures<'a> {
    /// Create a mock endpoint for the first listing page, `GET /pokemon?limit={limit}`.
    ///
    /// # Arguments
    /// - `limit` - The `limit` query value the request must carry
    /// - `listing` - Listing document to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_listing_endpoint(
        &mut self,
        limit: u32,
        listing: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(listing.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a later listing page,
    /// `GET /pokemon?offset={offset}&limit={limit}`.
    pub fn create_listing_page_endpoint(
        &mut self,
        offset: u32,
        limit: u32,
        listing: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), offset.to_string()),
                Matcher::UrlEncoded("limit".into(), limit.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(listing.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a listing endpoint that fails with `status`.
    pub fn create_listing_error_endpoint(
        &mut self,
        limit: u32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for one detail document, `GET /pokemon/{id}/`.
    ///
    /// # Arguments
    /// - `id` - Pokédex number in the endpoint path
    /// - `detail` - Detail document to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_detail_endpoint(
        &mut self,
        id: u32,
        detail: &Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}/", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(detail.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a detail endpoint that fails with `status`.
    pub fn create_detail_error_endpoint(
        &mut self,
        id: u32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}/", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /pokemon/{id}/encounters`.
    pub fn create_encounters_endpoint(
        &mut self,
        id: u32,
        encounters: &Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}/encounters", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(encounters.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an encounters endpoint answering with `status` and a non-JSON body.
    pub fn create_encounters_error_endpoint(
        &mut self,
        id: u32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}/encounters", id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_body("Not Found")
            .expect(expected_requests)
            .create()
    }
}
