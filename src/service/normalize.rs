//! Detail document normalization.
//!
//! Converts the provider's nested wrapper shapes into a flat [`RosterEntry`]. Sprite gaps are
//! recovered through ordered fallback chains ending in a placeholder that embeds the entry's
//! name, so the resulting image locators are never empty. Violations of the entry invariants
//! (empty name, no types) are reported as [`Error::MalformedEntry`].

use crate::{
    error::Error,
    model::{
        api::{ArtworkDto, DetailDto, SpritesDto},
        RosterEntry, StatKey, Stats,
    },
};

const PLACEHOLDER_BASE: &str = "https://placehold.co/150x150";

/// Placeholder shown when no default artwork exists.
pub fn placeholder_image(name: &str) -> String {
    format!("{PLACEHOLDER_BASE}/e0e0e0/000000?text={name}")
}

/// Gold-tinted placeholder tagged "Shiny".
pub fn shiny_placeholder_image(name: &str) -> String {
    format!("{PLACEHOLDER_BASE}/ffd700/000000?text=Shiny%20{name}")
}

/// Placeholder for an image that failed to load, matching the variant being shown.
pub fn fallback_image(name: &str, shiny: bool) -> String {
    if shiny {
        shiny_placeholder_image(name)
    } else {
        placeholder_image(name)
    }
}

/// Normalizes one detail document.
///
/// # Arguments
/// - `detail` - Detail document as returned by the provider
///
/// # Returns
/// - `Ok(RosterEntry)` - Entry with resolved images, projected names and the canonical stats
/// - `Err(Error::MalformedEntry)` - The document has no name or no types
pub fn normalize_entry(detail: DetailDto) -> Result<RosterEntry, Error> {
    let name = detail.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(Error::MalformedEntry {
            name: format!("#{}", detail.id),
            reason: "missing name".to_string(),
        });
    }

    let types: Vec<String> = detail
        .types
        .into_iter()
        .map(|slot| slot.kind.name)
        .filter(|type_name| !type_name.is_empty())
        .collect();
    if types.is_empty() {
        return Err(Error::MalformedEntry {
            name,
            reason: "no types".to_string(),
        });
    }

    let sprites = detail.sprites.unwrap_or_default();
    let (display_image, shiny_display_image) = resolve_images(&sprites, &name);

    let mut stats = Stats::default();
    for slot in detail.stats {
        // Non-canonical stats (accuracy, evasion) are dropped.
        if let Some(key) = StatKey::from_api_name(&slot.stat.name) {
            stats.insert(key, slot.base_stat);
        }
    }

    Ok(RosterEntry {
        id: detail.id,
        name,
        display_image,
        shiny_display_image,
        types,
        height: detail.height,
        weight: detail.weight,
        abilities: detail
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        stats,
        moves: detail
            .moves
            .into_iter()
            .map(|slot| slot.move_ref.name)
            .collect(),
        locations: None,
    })
}

/// Resolves `(default, shiny)` image locators: official artwork, then the legacy sprite, then
/// a placeholder.
fn resolve_images(sprites: &SpritesDto, name: &str) -> (String, String) {
    let artwork = sprites
        .other
        .as_ref()
        .and_then(|other| other.official_artwork.as_ref());

    let display_image = first_present([
        artwork.and_then(|a: &ArtworkDto| a.front_default.as_deref()),
        sprites.front_default.as_deref(),
    ])
    .unwrap_or_else(|| placeholder_image(name));

    let shiny_display_image = first_present([
        artwork.and_then(|a: &ArtworkDto| a.front_shiny.as_deref()),
        sprites.front_shiny.as_deref(),
    ])
    .unwrap_or_else(|| shiny_placeholder_image(name));

    (display_image, shiny_display_image)
}

/// First candidate that is present and non-blank.
fn first_present<const N: usize>(candidates: [Option<&str>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|locator| !locator.trim().is_empty())
        .map(str::to_string)
}
