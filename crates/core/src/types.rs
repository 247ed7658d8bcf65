//! Domain types passed between the pipeline stages.

use serde::{Deserialize, Serialize};

/// A single web search result used as model context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title.
    pub title: String,

    /// Short body excerpt.
    pub body: String,
}

impl SearchHit {
    /// Create a new search hit.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Render the `"<title>: <body>"` form consumed by the outline prompt.
    pub fn snippet(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }
}

/// Classification of a parsed outline body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyLineKind {
    /// Heading-like line rendered in the larger accent style.
    Emphasis,
    /// Plain line rendered as a standard bullet.
    Bullet,
}

/// One body line of a parsed slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyLine {
    /// Line text with bullet and emphasis markers already stripped.
    pub text: String,

    /// How the renderer should style this line.
    pub kind: BodyLineKind,
}

impl BodyLine {
    /// Create an emphasis line.
    pub fn emphasis(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BodyLineKind::Emphasis,
        }
    }

    /// Create a plain bullet line.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BodyLineKind::Bullet,
        }
    }

    /// Whether this line carries the emphasis style.
    pub fn is_emphasis(&self) -> bool {
        self.kind == BodyLineKind::Emphasis
    }
}

/// Parsed representation of one outline segment.
///
/// Created by the outline parser, consumed once by the deck renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Raw marker text before the first colon; not guaranteed to be a
    /// clean integer.
    pub ordinal_label: String,

    /// Slide title, taken verbatim from the outline.
    pub heading: String,

    /// Body lines in outline order.
    pub body: Vec<BodyLine>,
}

impl SlideRecord {
    /// Create a new record with the given label and heading.
    pub fn new(ordinal_label: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            ordinal_label: ordinal_label.into(),
            heading: heading.into(),
            body: Vec::new(),
        }
    }

    /// Append a body line to this record.
    pub fn push_line(&mut self, line: BodyLine) {
        self.body.push(line);
    }

    /// Heading used when a segment carries no body text at all.
    pub fn fallback_heading(ordinal_label: &str) -> String {
        format!("Slide {}", ordinal_label)
    }
}
