//! Fixture constants modelled on the first-generation roster.

/// Size of the first-generation roster.
pub static GENERATION_ONE_SIZE: u32 = 151;

/// Ids of the twelve first-generation Pokémon carrying the fire type.
pub static FIRE_IDS: [u32; 12] = [4, 5, 6, 37, 38, 58, 59, 77, 78, 126, 136, 146];

/// Page size used by the front-end.
pub static TEST_PAGE_SIZE: usize = 20;
