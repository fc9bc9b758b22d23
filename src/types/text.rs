// src/types/text.rs
//! Inline rich-text vocabulary: spans, annotations, mentions.
//!
//! The `kind` variant carries the content-specific data, making invalid
//! states unrepresentable: a mention span cannot exist without mention
//! data, an equation span cannot exist without an expression.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text color as reported by the API, `default` meaning "no color".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    #[default]
    Default,
    Named(String),
}

impl Color {
    pub fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Color::Default => "default",
            Color::Named(name) => name,
        }
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        if value == "default" {
            Color::Default
        } else {
            Color::Named(value)
        }
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orthogonal style flags on a span. Any combination may be set at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// A link target: either the structured `{url}` object from a text span,
/// or a raw string (the span-level `href`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LinkTarget {
    Structured { url: String },
    Raw(String),
}

impl LinkTarget {
    /// The URL to emit: the structured URL field when present, else the
    /// raw link value.
    pub fn url(&self) -> &str {
        match self {
            LinkTarget::Structured { url } => url,
            LinkTarget::Raw(value) => value,
        }
    }
}

/// A date mention value. Notion reports dates as ISO strings; they pass
/// through to the output verbatim, so no parsing happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateMention {
    pub start: String,
    pub end: Option<String>,
}

/// Mention sub-kinds that affect how span content is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MentionData {
    User,
    Page,
    Date(DateMention),
    /// A mention sub-kind this client doesn't interpret; rendered from
    /// the span's plain text like user/page mentions.
    Other(String),
}

/// The content variant of a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpanKind {
    Text {
        content: String,
        link: Option<LinkTarget>,
    },
    Mention(MentionData),
    Equation {
        expression: String,
    },
}

/// One run of styled text within a rich-text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub kind: SpanKind,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// A plain unstyled text span, the most common case in fixtures
    /// and tests.
    pub fn plain(text: &str) -> Self {
        Self {
            kind: SpanKind::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// A text span with the given annotations.
    pub fn styled(text: &str, annotations: Annotations) -> Self {
        Self {
            annotations,
            ..Self::plain(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_strings() {
        assert_eq!(Color::from("default".to_string()), Color::Default);
        let blue = Color::from("blue".to_string());
        assert_eq!(blue.as_str(), "blue");
        assert!(!blue.is_default());
    }

    #[test]
    fn link_target_prefers_structured_url() {
        let structured = LinkTarget::Structured {
            url: "https://example.com".into(),
        };
        assert_eq!(structured.url(), "https://example.com");
        assert_eq!(LinkTarget::Raw("/relative".into()).url(), "/relative");
    }
}
