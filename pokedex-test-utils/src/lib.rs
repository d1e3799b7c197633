//! Shared fixtures for Pokédex integration tests.
//!
//! Tests describe the upstream PokéAPI they need with [`TestBuilder`] and receive a
//! [`TestContext`] holding a mockito server and a `PokeApiClient` pointed at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::pokemon::factory, TestBuilder, TestContext, TestError};
}
