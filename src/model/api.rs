//! Upstream PokéAPI document shapes.
//!
//! Only the fields the normalizer reads are modelled. Nested nodes that the provider is known to
//! omit or null out (sprites in particular) are `Option` or `#[serde(default)]` so a shape gap
//! never fails deserialization; the normalizer falls back instead.

use serde::{Deserialize, Serialize};

/// A `{name, url}` reference to another upstream resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResourceDto {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the `/pokemon` listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDto {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResourceDto>,
}

/// The `/pokemon/{id}` detail document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Option<SpritesDto>,
    #[serde(default)]
    pub types: Vec<TypeSlotDto>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlotDto>,
    #[serde(default)]
    pub stats: Vec<StatSlotDto>,
    #[serde(default)]
    pub moves: Vec<MoveSlotDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpritesDto {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSpritesDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSpritesDto {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkDto {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeSlotDto {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilitySlotDto {
    pub ability: NamedResourceDto,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatSlotDto {
    pub base_stat: u32,
    pub stat: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveSlotDto {
    #[serde(rename = "move")]
    pub move_ref: NamedResourceDto,
}

/// One element of the `/pokemon/{id}/encounters` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterDto {
    pub location_area: NamedResourceDto,
}
