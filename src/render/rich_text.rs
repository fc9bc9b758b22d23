// src/render/rich_text.rs
//! Inline text rendering: reduces an ordered span sequence into one
//! concatenated styled string.
//!
//! This is a pure fold. Output order always matches input order; each
//! span contributes exactly the annotation pipeline's output for its
//! resolved content.

use super::annotations::{stylize, SpanContext};
use crate::types::{LinkTarget, MentionData, RichTextItem, SpanKind};

/// Renders a rich-text span sequence to a markdown/HTML fragment.
pub fn render_rich_text(spans: &[RichTextItem]) -> String {
    spans.iter().fold(String::new(), |mut acc, span| {
        acc.push_str(&stylize(&span_context(span)));
        acc
    })
}

/// Merges one span's content fields and annotation fields into a single
/// context for the annotation pipeline.
fn span_context(span: &RichTextItem) -> SpanContext {
    let mut ctx = SpanContext::new(span.plain_text.clone(), &span.annotations);

    match &span.kind {
        SpanKind::Text { content, link } => {
            ctx.content = content.clone();
            ctx.link = link.clone();
        }
        SpanKind::Equation { expression } => {
            ctx.content = expression.clone();
            ctx.equation = true;
        }
        SpanKind::Mention(mention) => {
            ctx.content = mention_content(mention, &span.plain_text);
        }
    }

    // The span-level href backs up a missing structured link.
    if ctx.link.is_none() {
        if let Some(href) = &span.href {
            ctx.link = Some(LinkTarget::Raw(href.clone()));
        }
    }

    ctx
}

/// Resolves a mention's content by sub-kind.
///
/// Date mentions with an end value render the arrow form with the start
/// value on both sides, matching the reference output byte for byte.
fn mention_content(mention: &MentionData, plain_text: &str) -> String {
    match mention {
        MentionData::User | MentionData::Page | MentionData::Other(_) => plain_text.to_string(),
        MentionData::Date(date) => {
            let value = if date.end.is_some() {
                format!("{} → {}", date.start, date.start)
            } else {
                date.start.clone()
            };
            format!("<time datetime=\"{}\">{}</time>", value, value)
        }
    }
}
