//! Tests for LocationService::fetch_locations.
//!
//! The lookup never fails its caller: provider errors and undecodable bodies come back as an
//! empty list.

use pokedex::service::LocationService;
use pokedex_test_utils::prelude::*;

/// Expected: location names in provider order
#[tokio::test]
async fn returns_location_names_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_encounters_endpoint(25, &["viridian-forest-area", "power-plant-area"], 1)
        .build()
        .await?;

    let locations = LocationService::new(&test.client).fetch_locations(25).await;

    assert_eq!(locations, vec!["viridian-forest-area", "power-plant-area"]);

    test.assert_mocks();

    Ok(())
}

/// Expected: empty list when no encounters are recorded
#[tokio::test]
async fn tolerates_no_encounters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_encounters_endpoint(151, &[], 1)
        .build()
        .await?;

    let locations = LocationService::new(&test.client).fetch_locations(151).await;

    assert!(locations.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expected: empty list instead of an error on a 404
#[tokio::test]
async fn swallows_provider_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_encounters_error_endpoint(9999, 404, 1)
        .build()
        .await?;

    let locations = LocationService::new(&test.client).fetch_locations(9999).await;

    assert!(locations.is_empty());

    test.assert_mocks();

    Ok(())
}
