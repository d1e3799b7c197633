//! End-to-end scenarios: load the roster from a mock PokéAPI, hand it to the controller and
//! drive it through the same calls the front-end makes.

use pokedex::{
    service::RosterService,
    state::{
        persistence::{FAVORITES_KEY, SHINY_KEY},
        KeyValueStore, MemoryStore, PokedexController, Preferences,
    },
};
use pokedex_test_utils::{
    constant::{GENERATION_ONE_SIZE, TEST_PAGE_SIZE},
    prelude::*,
};

async fn loaded_controller(
    store: &MemoryStore,
) -> Result<(TestContext, PokedexController<MemoryStore>), TestError> {
    let test = TestBuilder::new()
        .with_roster(GENERATION_ONE_SIZE)
        .build()
        .await?;
    let roster = RosterService::from_config(&test.client, &test.config())
        .load_roster(GENERATION_ONE_SIZE)
        .await?;

    let mut controller = PokedexController::new(Preferences::new(store.clone()), TEST_PAGE_SIZE);
    controller.set_roster(roster);

    Ok((test, controller))
}

/// Expected: 20 cards on page 1 of 8
#[tokio::test]
async fn full_roster_shows_eight_pages() -> Result<(), TestError> {
    let (test, controller) = loaded_controller(&MemoryStore::new()).await?;

    let visible = controller.visible();
    assert_eq!(visible.items.len(), 20);
    assert_eq!(visible.total_pages, 8);
    assert_eq!(controller.total_filtered(), 151);

    test.assert_mocks();

    Ok(())
}

/// Expected: exactly the twelve fire types on a single page
#[tokio::test]
async fn fire_filter_fits_on_one_page() -> Result<(), TestError> {
    let (test, mut controller) = loaded_controller(&MemoryStore::new()).await?;

    controller.set_page(5);
    controller.set_selected_type(Some("fire".to_string()));

    assert_eq!(controller.total_filtered(), 12);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.current_page(), 1);
    assert!(controller
        .visible()
        .items
        .iter()
        .all(|entry| entry.has_type("fire")));
    assert!(controller.type_facets().contains("fire"));

    test.assert_mocks();

    Ok(())
}

/// Expected: case-insensitive search combined with the type filter
#[tokio::test]
async fn search_combines_with_type_filter() -> Result<(), TestError> {
    let (test, mut controller) = loaded_controller(&MemoryStore::new()).await?;

    controller.set_search_term("CHAR");
    let names: Vec<String> = controller
        .visible()
        .items
        .iter()
        .map(|entry| entry.name.clone())
        .collect();
    assert_eq!(names, vec!["charmander", "charmeleon", "charizard"]);

    controller.set_search_term("mew");
    controller.set_selected_type(Some("fire".to_string()));
    assert_eq!(controller.total_filtered(), 0);
    assert_eq!(controller.total_pages(), 1);
    assert!(controller.visible().items.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expected: favorites survive a reload and drive the favorites-only view
#[tokio::test]
async fn favorites_survive_reload() -> Result<(), TestError> {
    let store = MemoryStore::new();
    {
        let (test, mut controller) = loaded_controller(&store).await?;
        controller.toggle_favorite(150);
        controller.toggle_favorite(25);
        controller.toggle_favorite(7);
        controller.toggle_favorite(7);
        controller.set_shiny_global(true);
        test.assert_mocks();
    }

    assert_eq!(
        store.get_item(FAVORITES_KEY)?.as_deref(),
        Some("[25,150]")
    );
    assert_eq!(store.get_item(SHINY_KEY)?.as_deref(), Some("true"));

    let (test, mut controller) = loaded_controller(&store).await?;
    controller.set_favorites_only(true);

    let ids: Vec<u32> = controller.visible().items.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![25, 150]);
    assert!(controller.shiny_global());
    assert_eq!(
        controller.visible().items[0].image_for(controller.is_shiny(25)),
        "https://artwork.test/shiny/25.png"
    );

    test.assert_mocks();

    Ok(())
}

/// Expected: a corrupt favorites slot is cleared and the controller starts empty
#[tokio::test]
async fn corrupt_favorites_are_discarded() -> Result<(), TestError> {
    let store = MemoryStore::new();
    store.set_item(FAVORITES_KEY, "not json")?;

    let (test, mut controller) = loaded_controller(&store).await?;

    assert!(controller.view().favorite_ids.is_empty());
    assert_eq!(store.get_item(FAVORITES_KEY)?, None);

    controller.set_favorites_only(true);
    assert_eq!(controller.total_filtered(), 0);

    test.assert_mocks();

    Ok(())
}
