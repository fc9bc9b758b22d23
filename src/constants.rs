// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! these should tell you how the system operates: how deep it recurses,
//! how much it fetches per round-trip, how it indents nested output.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips during recursive fetching.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Default value for the `Notion-Version` request header.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Maximum nesting depth when recursively fetching block children.
///
/// Notion block trees can nest arbitrarily deep (toggles within lists
/// within toggles). This bound makes pathological remote trees fail
/// predictably instead of growing the stack without limit.
pub const MAX_FETCH_DEPTH: u8 = 50;

// ---------------------------------------------------------------------------
// Rendering boundaries
// ---------------------------------------------------------------------------

/// Number of spaces added to the depth counter per nesting level when
/// emitting markdown. Two spaces is the markdown convention for nested
/// list content.
pub const INDENT_SPACES: usize = 2;

/// Maximum depth counter value the markdown emitter will descend to.
///
/// The fetcher already bounds tree depth, but rendering is also guarded
/// so a hand-constructed tree cannot recurse without limit.
pub const MAX_RENDER_DEPTH: usize = 200;

// ---------------------------------------------------------------------------
// Document output
// ---------------------------------------------------------------------------

/// Default label used to namespace document node identifiers and name
/// the emitted collection.
pub const DEFAULT_NODE_TYPE_LABEL: &str = "Notion";
