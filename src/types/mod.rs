// src/types/mod.rs
//! Shared domain vocabulary: identifiers and inline rich text.

mod ids;
mod text;

pub use ids::*;
pub use text::*;
