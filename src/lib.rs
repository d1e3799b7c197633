//! Core of the Pokédex viewer.
//!
//! Everything that does not touch the DOM lives here so it can be exercised natively: upstream
//! data loading and normalization, the persistence port for user preferences, and the pure
//! view-state engine the Dioxus front-end renders from.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod state;
