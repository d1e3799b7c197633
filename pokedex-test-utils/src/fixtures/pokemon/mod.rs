use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn pokemon<'a>(&'a mut self) -> PokemonFixtures<'a> {
        PokemonFixtures { setup: self }
    }
}

pub struct PokemonFixtures<'a> {
    pub setup: &'a mut TestContext,
}
