//! Upstream document factories.
//!
//! Documents are built as `serde_json::Value` in the provider's wire shape so tests exercise the
//! real deserialization path, including the nested wrappers and nullable sprite nodes.

use serde_json::{json, Value};

use crate::constant::FIRE_IDS;

/// Name used for `id` in generated rosters. A handful of ids carry their real names so search
/// tests read naturally.
pub fn roster_name(id: u32) -> String {
    match id {
        1 => "bulbasaur".to_string(),
        4 => "charmander".to_string(),
        5 => "charmeleon".to_string(),
        6 => "charizard".to_string(),
        25 => "pikachu".to_string(),
        150 => "mewtwo".to_string(),
        151 => "mew".to_string(),
        _ => format!("pokemon-{:03}", id),
    }
}

/// Types used for `id` in generated rosters: fire for [`FIRE_IDS`], grass/poison for
/// bulbasaur, normal otherwise.
pub fn roster_types(id: u32) -> Vec<&'static str> {
    if FIRE_IDS.contains(&id) {
        vec!["fire"]
    } else if id == 1 {
        vec!["grass", "poison"]
    } else {
        vec!["normal"]
    }
}

/// Create a complete detail document with official artwork and legacy sprites.
///
/// # Arguments
/// - `id` - Pokédex number
/// - `name` - Lowercase name
/// - `types` - Type names in slot order
///
/// # Returns
/// - `Value` - Detail document in the provider's shape
pub fn mock_detail(id: u32, name: &str, types: &[&str]) -> Value {
    let type_slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(slot, type_name)| {
            json!({
                "slot": slot + 1,
                "type": { "name": type_name, "url": format!("https://types.test/{type_name}/") }
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://sprites.test/{id}.png"),
            "front_shiny": format!("https://sprites.test/shiny/{id}.png"),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://artwork.test/{id}.png"),
                    "front_shiny": format!("https://artwork.test/shiny/{id}.png")
                }
            }
        },
        "types": type_slots,
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false },
            { "ability": { "name": "chlorophyll", "url": "" }, "is_hidden": true }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 65, "effort": 0, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 45, "effort": 0, "stat": { "name": "speed", "url": "" } }
        ],
        "moves": [
            { "move": { "name": "tackle", "url": "" }, "version_group_details": [] },
            { "move": { "name": "growl", "url": "" }, "version_group_details": [] },
            { "move": { "name": "vine-whip", "url": "" }, "version_group_details": [] }
        ]
    })
}

/// Detail document for a generated roster slot.
pub fn mock_roster_detail(id: u32) -> Value {
    mock_detail(id, &roster_name(id), &roster_types(id))
}

/// Detail document whose `other` sprite node is missing entirely.
pub fn mock_detail_without_artwork(id: u32, name: &str, types: &[&str]) -> Value {
    let mut detail = mock_detail(id, name, types);
    detail["sprites"]["other"] = Value::Null;
    detail
}

/// Detail document with no usable sprite at all.
pub fn mock_detail_without_sprites(id: u32, name: &str, types: &[&str]) -> Value {
    let mut detail = mock_detail(id, name, types);
    detail["sprites"] = json!({
        "front_default": null,
        "front_shiny": null,
        "other": { "official-artwork": { "front_default": null, "front_shiny": null } }
    });
    detail
}

/// Listing page referencing `entries` as `(name, detail_url)` pairs.
pub fn mock_listing(
    entries: &[(String, String)],
    count: usize,
    next: Option<&str>,
    previous: Option<&str>,
) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(name, url)| json!({ "name": name, "url": url }))
        .collect();

    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": results
    })
}

/// Encounter array listing `location_names` in order.
pub fn mock_encounters(location_names: &[&str]) -> Value {
    Value::Array(
        location_names
            .iter()
            .map(|name| {
                json!({
                    "location_area": { "name": name, "url": "" },
                    "version_details": []
                })
            })
            .collect(),
    )
}
