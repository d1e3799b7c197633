//! Normalized roster model: entries, base stats and the type facet set.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

/// Moves shown in the detail view; upstream lists can run to the hundreds.
pub const DETAIL_MOVE_LIMIT: usize = 6;

/// The six canonical base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKey {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKey {
    /// Display order.
    pub const ALL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Attack,
        StatKey::Defense,
        StatKey::SpecialAttack,
        StatKey::SpecialDefense,
        StatKey::Speed,
    ];

    /// Matches the upstream stat name; anything outside the canonical six yields `None`.
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "special-attack" => Some(Self::SpecialAttack),
            "special-defense" => Some(Self::SpecialDefense),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }

    pub fn api_name(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Base stats keyed by [`StatKey`], each in `0..=255`.
///
/// A stat the provider did not report is simply absent; readers use [`Stats::get`] and render
/// the gap rather than assuming all six are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats(BTreeMap<StatKey, u8>);

impl Stats {
    /// Stores `value`, saturating anything above 255.
    pub fn insert(&mut self, key: StatKey, value: u32) {
        self.0.insert(key, value.min(u8::MAX as u32) as u8);
    }

    pub fn get(&self, key: StatKey) -> Option<u8> {
        self.0.get(&key).copied()
    }

    /// True once all six canonical stats are present.
    pub fn is_complete(&self) -> bool {
        StatKey::ALL.iter().all(|key| self.0.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One normalized Pokémon.
///
/// Entries are immutable once a roster is loaded. Favorite and shiny state live in the view
/// state, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub display_image: String,
    pub shiny_display_image: String,
    /// Upstream slot order, never empty.
    pub types: Vec<String>,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub abilities: Vec<String>,
    pub stats: Stats,
    pub moves: Vec<String>,
    /// Filled lazily by the detail view.
    pub locations: Option<Vec<String>>,
}

impl RosterEntry {
    /// Height in meters.
    pub fn height_m(&self) -> f64 {
        self.height as f64 * 0.1
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight as f64 * 0.1
    }

    /// Pokédex number padded to three digits, e.g. `#007`.
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn image_for(&self, shiny: bool) -> &str {
        if shiny {
            &self.shiny_display_image
        } else {
            &self.display_image
        }
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// The prefix of `moves` the detail view shows.
    pub fn featured_moves(&self) -> &[String] {
        &self.moves[..self.moves.len().min(DETAIL_MOVE_LIMIT)]
    }
}

/// Distinct type labels seen across a roster, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFacets(BTreeSet<String>);

impl TypeFacets {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a RosterEntry>,
    {
        Self(
            entries
                .into_iter()
                .flat_map(|entry| entry.types.iter().cloned())
                .collect(),
        )
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.0.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}
