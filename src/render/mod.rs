// src/render/mod.rs
//! Transformation of fetched content into markdown and normalized
//! property values.

mod annotations;
mod markdown;
mod properties;
mod rich_text;

pub use annotations::{stylize, SpanContext};
pub use markdown::{render_blocks, RenderOptions};
pub use properties::normalize_properties;
pub use rich_text::render_rich_text;
