// src/render/markdown.rs
//! Markdown emission: recursive left-to-right reduction over a block
//! tree, dispatching on the block kind.
//!
//! The reduction carries a depth counter that grows by two spaces per
//! nesting level. Nested children render at depth+2, are indented by
//! the current depth, and end with a trailing newline inserted at the
//! kind-specific point. Output is order-preserving and deterministic
//! for a given tree.

use crate::constants::{INDENT_SPACES, MAX_RENDER_DEPTH};
use crate::model::Block;
use crate::render::rich_text::render_rich_text;

/// Options that alter the emitted markup.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Demote every heading by one level so the document title can own
    /// level 1 in the assembled page.
    pub lower_heading_level: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lower_heading_level: true,
        }
    }
}

/// Renders a record's block tree to a markdown/HTML body.
pub fn render_blocks(blocks: &[Block], options: &RenderOptions) -> String {
    render_at(blocks, options, 0)
}

fn render_at(blocks: &[Block], options: &RenderOptions, depth: usize) -> String {
    if depth > MAX_RENDER_DEPTH {
        log::warn!(
            "Block tree exceeds maximum render depth {}; deeper content is dropped",
            MAX_RENDER_DEPTH
        );
        return String::new();
    }

    blocks.iter().fold(String::new(), |mut acc, block| {
        acc.push_str(&emit_block(block, options, depth));
        acc
    })
}

fn emit_block(block: &Block, options: &RenderOptions, depth: usize) -> String {
    let nested = render_nested(block, options, depth);

    match block {
        Block::Paragraph(b) => {
            let text = render_rich_text(&b.content.rich_text);
            // Table rows and code-fence lines form multi-line
            // constructs with their neighbors; a paragraph break would
            // split them apart.
            let is_table_row = text.starts_with('|') && text.ends_with('|');
            let is_code_fence = b
                .content
                .rich_text
                .first()
                .map(|span| span.plain_text.starts_with("```"))
                .unwrap_or(false);
            let separator = if is_table_row || is_code_fence {
                "\n"
            } else {
                "\n\n"
            };
            format!("{}{}{}", text, separator, nested)
        }
        Block::Heading(b) => {
            let text = render_rich_text(&b.content.rich_text);
            let hashes = b.level as usize + usize::from(options.lower_heading_level);
            format!("\n{} {}\n{}", "#".repeat(hashes), text, nested)
        }
        Block::ToDo(b) => {
            let text = render_rich_text(&b.content.rich_text);
            let marker = if b.checked { 'x' } else { ' ' };
            format!("- [{}] {}\n{}", marker, text, nested)
        }
        Block::BulletedListItem(b) => {
            let text = render_rich_text(&b.content.rich_text);
            format!("* {}\n{}", text, nested)
        }
        Block::NumberedListItem(b) => {
            // Every item literally starts with `1.`; downstream
            // markdown renderers handle the numbering.
            let text = render_rich_text(&b.content.rich_text);
            format!("1. {}\n{}", text, nested)
        }
        Block::Toggle(b) => {
            let text = render_rich_text(&b.content.rich_text);
            format!("<details><summary>{}</summary>{}</details>", text, nested)
        }
        Block::Unsupported(b) => {
            format!(
                "<!-- Block type '{}' is not supported yet. -->\n{}",
                b.kind, nested
            )
        }
        // Unknown kinds contribute nothing to the accumulator.
        Block::Other(_) => String::new(),
    }
}

fn render_nested(block: &Block, options: &RenderOptions, depth: usize) -> String {
    let children = block.children();
    if children.is_empty() {
        return String::new();
    }

    let inner = render_at(children, options, depth + INDENT_SPACES);
    let indent = " ".repeat(depth);
    let indented = inner
        .split('\n')
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n");
    indented + "\n"
}
