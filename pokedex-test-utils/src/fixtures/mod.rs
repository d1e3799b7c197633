//! Fixture modules for upstream documents and mock HTTP endpoints.

pub mod pokemon;
