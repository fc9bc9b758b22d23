// src/lib.rs
//! notion2site library — converts Notion database records into flat
//! front-matter + markdown documents for static-site builds.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`
//! - **Configuration** — `SourceConfig`, `CommandLineInput`
//! - **Domain model** — `Record`, `Block`, `RichTextItem`, properties
//! - **API client** — `NotionHttpClient`, `NotionRepository`,
//!   `BlockTreeFetcher`, typed pagination results
//! - **Rendering** — `render_blocks`, `render_rich_text`,
//!   `normalize_properties`, the annotation pipeline
//! - **Documents** — `assemble_document`, `DocumentNode`, the writer

mod api;
mod config;
mod constants;
mod document;
mod error;
mod model;
mod output;
mod pipeline;
mod render;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};

// --- Configuration ---
pub use crate::config::{CommandLineInput, SourceConfig};
pub use crate::constants::{DEFAULT_NODE_TYPE_LABEL, DEFAULT_NOTION_VERSION, MAX_FETCH_DEPTH};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BulletedListItemBlock, HeadingBlock, NormalizedProperty,
    NumberedListItemBlock, OtherBlock, ParagraphBlock, PropertyContent, PropertyPayload, Record,
    RecordProperty, TextBlockContent, ToDoBlock, ToggleBlock, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DateMention, LinkTarget, MentionData,
    RecordId, RichTextItem, SpanKind,
};

// --- API Client ---
pub use crate::api::{
    BlockTreeFetcher, NotionHttpClient, NotionRepository, PageCollection, Termination,
    TruncationReason,
};
pub use crate::api::pagination::Paginated;
pub use crate::api::responses::{block_from_value, record_from_value};

// --- Rendering ---
pub use crate::render::{
    normalize_properties, render_blocks, render_rich_text, stylize, RenderOptions, SpanContext,
};

// --- Documents ---
pub use crate::document::{assemble_document, DocumentNode};
pub use crate::output::{write_documents, OutputReport};
pub use crate::pipeline::SourcePipeline;
