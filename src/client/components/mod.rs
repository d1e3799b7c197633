pub mod detail_modal;
pub mod filter_bar;
pub mod navbar;
pub mod page;
pub mod pagination;
pub mod pokemon_card;
pub mod pokemon_grid;

pub use detail_modal::DetailModal;
pub use filter_bar::FilterBar;
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
pub use pokemon_card::PokemonCard;
pub use pokemon_grid::PokemonGrid;
