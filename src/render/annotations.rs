// src/render/annotations.rs
//! The annotation pipeline: an ordered composition of style wrappers
//! over one span context.
//!
//! Order is semantically load-bearing. A link must wrap already-bolded
//! text (`[**x**](u)`), never the other way around, so the steps run in
//! one fixed left-to-right sequence. Each step is a pure pass-through
//! when its triggering condition is false.

use crate::types::{Annotations, Color, LinkTarget};

/// Everything one span needs to be stylized: content plus the merged
/// annotation and link fields.
#[derive(Debug, Clone, Default)]
pub struct SpanContext {
    pub content: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub color: Color,
    pub link: Option<LinkTarget>,
    /// Set when the span's kind is an equation; wraps last.
    pub equation: bool,
}

impl SpanContext {
    pub fn new(content: impl Into<String>, annotations: &Annotations) -> Self {
        Self {
            content: content.into(),
            bold: annotations.bold,
            italic: annotations.italic,
            code: annotations.code,
            strikethrough: annotations.strikethrough,
            underline: annotations.underline,
            color: annotations.color.clone(),
            link: None,
            equation: false,
        }
    }
}

type AnnotationStep = fn(&SpanContext, String) -> String;

/// The fixed wrapper sequence. Reordering this table changes output.
const PIPELINE: &[AnnotationStep] = &[
    wrap_bold,
    wrap_italic,
    wrap_code,
    wrap_strikethrough,
    wrap_underline,
    wrap_color,
    wrap_link,
    wrap_equation,
];

/// Applies every active annotation to the span's content.
pub fn stylize(ctx: &SpanContext) -> String {
    PIPELINE
        .iter()
        .fold(ctx.content.clone(), |text, step| step(ctx, text))
}

fn wrap_bold(ctx: &SpanContext, text: String) -> String {
    if ctx.bold {
        format!("**{}**", text)
    } else {
        text
    }
}

fn wrap_italic(ctx: &SpanContext, text: String) -> String {
    if ctx.italic {
        format!("_{}_", text)
    } else {
        text
    }
}

fn wrap_code(ctx: &SpanContext, text: String) -> String {
    if ctx.code {
        format!("`{}`", text)
    } else {
        text
    }
}

fn wrap_strikethrough(ctx: &SpanContext, text: String) -> String {
    if ctx.strikethrough {
        format!("~~{}~~", text)
    } else {
        text
    }
}

fn wrap_underline(ctx: &SpanContext, text: String) -> String {
    if ctx.underline {
        format!("<u>{}</u>", text)
    } else {
        text
    }
}

fn wrap_color(ctx: &SpanContext, text: String) -> String {
    if ctx.color.is_default() {
        text
    } else {
        format!("<span notion-color=\"{}\">{}</span>", ctx.color, text)
    }
}

fn wrap_link(ctx: &SpanContext, text: String) -> String {
    match &ctx.link {
        Some(link) => format!("[{}]({})", text, link.url()),
        None => text,
    }
}

fn wrap_equation(ctx: &SpanContext, text: String) -> String {
    if ctx.equation {
        format!("${}$", text)
    } else {
        text
    }
}
