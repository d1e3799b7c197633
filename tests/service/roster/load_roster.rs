//! Tests for RosterService::load_roster.
//!
//! Covers the bulk load against a mock PokéAPI: listing order preservation under bounded
//! fan-out, type facet aggregation, sprite fallbacks and both detail failure policies.

use pokedex::{
    config::DetailFailurePolicy, error::Error, model::StatKey, service::normalize,
    service::RosterService,
};
use pokedex_test_utils::{constant::GENERATION_ONE_SIZE, prelude::*};

/// Tests loading the full first-generation roster.
///
/// Expected: Ok with 151 entries in listing order and sorted type facets
#[tokio::test]
async fn loads_full_roster_in_listing_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster(GENERATION_ONE_SIZE)
        .build()
        .await?;

    let roster = RosterService::from_config(&test.client, &test.config())
        .load_roster(GENERATION_ONE_SIZE)
        .await?;

    assert_eq!(roster.entries.len(), 151);
    assert!(roster
        .entries
        .iter()
        .zip(1..=151u32)
        .all(|(entry, id)| entry.id == id));
    assert_eq!(
        roster.type_facets.to_vec(),
        vec!["fire", "grass", "normal", "poison"]
    );
    assert!(roster.skipped.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Tests that a small fan-out bound still assembles results by position.
///
/// Expected: Ok with entries in listing order across several batches
#[tokio::test]
async fn bounded_fan_out_preserves_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster(23).build().await?;
    let config = test.config_with(4, DetailFailurePolicy::Abort);

    let roster = RosterService::from_config(&test.client, &config)
        .load_roster(23)
        .await?;

    let ids: Vec<u32> = roster.entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, (1..=23).collect::<Vec<_>>());

    test.assert_mocks();

    Ok(())
}

/// Tests that every entry is normalized from its detail document.
///
/// Expected: Ok with artwork, abilities, stats and moves projected
#[tokio::test]
async fn normalizes_detail_documents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster(1).build().await?;

    let roster = RosterService::from_config(&test.client, &test.config())
        .load_roster(1)
        .await?;

    let bulbasaur = &roster.entries[0];
    assert_eq!(bulbasaur.name, "bulbasaur");
    assert_eq!(bulbasaur.types, vec!["grass", "poison"]);
    assert_eq!(bulbasaur.display_image, "https://artwork.test/1.png");
    assert_eq!(bulbasaur.shiny_display_image, "https://artwork.test/shiny/1.png");
    assert_eq!(bulbasaur.abilities, vec!["overgrow", "chlorophyll"]);
    assert!(bulbasaur.stats.is_complete());
    assert_eq!(bulbasaur.stats.get(StatKey::SpecialAttack), Some(65));
    assert_eq!(bulbasaur.moves, vec!["tackle", "growl", "vine-whip"]);
    assert!(bulbasaur.locations.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests sprite fallbacks when artwork or every sprite is missing.
///
/// Expected: Ok with legacy sprites for the first entry and placeholders for the second
#[tokio::test]
async fn recovers_sprite_gaps() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_detail(factory::mock_detail_without_artwork(7, "squirtle", &["water"]))
        .with_detail(factory::mock_detail_without_sprites(
            8,
            "wartortle",
            &["water"],
        ))
        .build()
        .await?;

    let roster = RosterService::from_config(&test.client, &test.config())
        .load_roster(2)
        .await?;

    assert_eq!(roster.entries[0].display_image, "https://sprites.test/7.png");
    assert_eq!(
        roster.entries[0].shiny_display_image,
        "https://sprites.test/shiny/7.png"
    );
    assert_eq!(
        roster.entries[1].display_image,
        normalize::placeholder_image("wartortle")
    );
    assert!(roster.entries[1].shiny_display_image.contains("wartortle"));
    assert!(roster.entries[1].shiny_display_image.contains("Shiny"));

    test.assert_mocks();

    Ok(())
}

/// Tests that a failing listing request fails the whole load.
///
/// Expected: Err(UnexpectedStatus) with status 500
#[tokio::test]
async fn fails_when_listing_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().with_listing_error(151, 500).build().await?;

    let result = RosterService::from_config(&test.client, &test.config())
        .load_roster(151)
        .await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 500, .. })
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests the abort policy on a single failing detail document.
///
/// Expected: Err(UnexpectedStatus) and no partial roster
#[tokio::test]
async fn aborts_on_detail_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster(3)
        .with_failing_detail(4, "charmander", 503)
        .build()
        .await?;

    let result = RosterService::from_config(&test.client, &test.config())
        .load_roster(4)
        .await;

    assert!(matches!(
        result,
        Err(Error::UnexpectedStatus { status: 503, .. })
    ));

    // All four requests share one batch, so every endpoint is still hit once
    test.assert_mocks();

    Ok(())
}

/// Tests that an abort stops issuing later batches.
///
/// Expected: Err with the first batch's failure
#[tokio::test]
async fn abort_skips_remaining_batches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_detail(1, "bulbasaur", 500)
        .with_detail(factory::mock_roster_detail(2))
        .expect_detail_requests(0)
        .build()
        .await?;
    let config = test.config_with(1, DetailFailurePolicy::Abort);

    let result = RosterService::from_config(&test.client, &config)
        .load_roster(2)
        .await;

    assert!(result.is_err());

    test.assert_mocks();

    Ok(())
}

/// Tests the skip policy with one failing and one malformed detail document.
///
/// Expected: Ok with both dropped and reported in `skipped`
#[tokio::test]
async fn skip_policy_drops_failed_entries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster(3)
        .with_failing_detail(4, "charmander", 500)
        .with_detail(factory::mock_roster_detail(5))
        .with_detail(factory::mock_detail(6, "charizard", &[]))
        .build()
        .await?;
    let config = test.config_with(2, DetailFailurePolicy::Skip);

    let roster = RosterService::from_config(&test.client, &config)
        .load_roster(6)
        .await?;

    let ids: Vec<u32> = roster.entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 5]);
    assert_eq!(roster.skipped, vec!["charmander", "charizard"]);
    assert_eq!(
        roster.type_facets.to_vec(),
        vec!["fire", "grass", "normal", "poison"]
    );

    test.assert_mocks();

    Ok(())
}

/// Tests the abort policy on a detail document without types.
///
/// Expected: Err(MalformedEntry)
#[tokio::test]
async fn aborts_on_malformed_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_detail(factory::mock_detail(132, "ditto", &[]))
        .build()
        .await?;

    let result = RosterService::from_config(&test.client, &test.config())
        .load_roster(1)
        .await;

    assert!(matches!(
        result,
        Err(Error::MalformedEntry { ref name, .. }) if name == "ditto"
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests a listing shorter than the requested limit.
///
/// Expected: Ok with only the listed entries
#[tokio::test]
async fn loads_short_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster(5)
        .with_listing_limit(GENERATION_ONE_SIZE)
        .build()
        .await?;

    let roster = RosterService::from_config(&test.client, &test.config())
        .load_roster(GENERATION_ONE_SIZE)
        .await?;

    let ids: Vec<u32> = roster.entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    test.assert_mocks();

    Ok(())
}

/// Tests the abort policy on two detail documents sharing one id.
///
/// Expected: Err(MalformedEntry) naming the later entry
#[tokio::test]
async fn aborts_on_duplicate_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_detail(factory::mock_roster_detail(1))
        .with_detail_at(2, factory::mock_detail(1, "ivysaur", &["grass"]))
        .build()
        .await?;

    let result = RosterService::from_config(&test.client, &test.config())
        .load_roster(2)
        .await;

    assert!(matches!(
        result,
        Err(Error::MalformedEntry { ref name, .. }) if name == "ivysaur"
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests the skip policy on two detail documents sharing one id.
///
/// Expected: Ok keeping the first entry and reporting the later one in `skipped`
#[tokio::test]
async fn skip_policy_drops_duplicate_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_detail(factory::mock_roster_detail(1))
        .with_detail_at(2, factory::mock_detail(1, "ivysaur", &["grass"]))
        .with_detail(factory::mock_roster_detail(3))
        .build()
        .await?;
    let config = test.config_with(2, DetailFailurePolicy::Skip);

    let roster = RosterService::from_config(&test.client, &config)
        .load_roster(3)
        .await?;

    let ids: Vec<u32> = roster.entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(roster.entries[0].name, "bulbasaur");
    assert_eq!(roster.skipped, vec!["ivysaur"]);

    test.assert_mocks();

    Ok(())
}
