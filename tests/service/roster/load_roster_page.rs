//! Tests for RosterService::load_roster_page.

use pokedex::service::RosterService;
use pokedex_test_utils::prelude::*;

/// Tests loading a later listing page by URL.
///
/// Expected: Ok with the page's entries and the provider's navigation links
#[tokio::test]
async fn loads_page_with_navigation_links() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let base = test.server.url();

    let entries = vec![
        (factory::roster_name(21), test.detail_url(21)),
        (factory::roster_name(25), test.detail_url(25)),
    ];
    let next = format!("{base}/pokemon?offset=22&limit=2");
    let previous = format!("{base}/pokemon?offset=18&limit=2");
    let listing = factory::mock_listing(&entries, 151, Some(&next), Some(&previous));

    let mut mocks = vec![test
        .pokemon()
        .create_listing_page_endpoint(20, 2, &listing, 1)];
    for id in [21, 25] {
        mocks.push(
            test.pokemon()
                .create_detail_endpoint(id, &factory::mock_roster_detail(id), 1),
        );
    }
    test.mocks.extend(mocks);

    let page = RosterService::from_config(&test.client, &test.config())
        .load_roster_page(&format!("{base}/pokemon?offset=20&limit=2"))
        .await?;

    let names: Vec<&str> = page.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["pokemon-021", "pikachu"]);
    assert_eq!(page.next.as_deref(), Some(next.as_str()));
    assert_eq!(page.previous.as_deref(), Some(previous.as_str()));
    assert_eq!(page.type_facets.to_vec(), vec!["normal"]);

    test.assert_mocks();

    Ok(())
}

/// Tests the last page, which carries no `next` link.
///
/// Expected: Ok with `next` absent
#[tokio::test]
async fn last_page_has_no_next_link() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let base = test.server.url();

    let entries = vec![(factory::roster_name(151), test.detail_url(151))];
    let previous = format!("{base}/pokemon?offset=149&limit=1");
    let listing = factory::mock_listing(&entries, 151, None, Some(&previous));

    let mut mocks = vec![test
        .pokemon()
        .create_listing_page_endpoint(150, 1, &listing, 1)];
    mocks.push(
        test.pokemon()
            .create_detail_endpoint(151, &factory::mock_roster_detail(151), 1),
    );
    test.mocks.extend(mocks);

    let page = RosterService::from_config(&test.client, &test.config())
        .load_roster_page(&format!("{base}/pokemon?offset=150&limit=1"))
        .await?;

    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].name, "mew");
    assert!(page.next.is_none());

    test.assert_mocks();

    Ok(())
}
