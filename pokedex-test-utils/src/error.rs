use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Pokedex(#[from] pokedex::error::Error),
}
