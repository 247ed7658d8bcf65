//! Line-oriented parsing of model outline text into slide records.
//!
//! The generator's output is a free-text convention, not a schema: slide
//! segments are announced by `Slide <n>:` markers but nothing guarantees
//! the model honors that shape. Parsing is total: malformed segments are
//! dropped, never errored, so a run may yield fewer slides than requested,
//! or none at all.

use crate::types::{BodyLine, SlideRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a slide marker at the start of a trimmed line: the literal
/// `Slide `, an ordinal label beginning with a decimal digit, and the
/// first colon on that line. Occurrences of "Slide " mid-line never open
/// a new segment.
static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Slide\s+(\d[^:]*):(.*)$").unwrap());

/// Parser states. A marker line moves to `Heading` or `Body`; `Heading`
/// resolves on the first non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekMarker,
    Heading,
    Body,
}

/// A slide segment still being accumulated.
struct Pending {
    label: String,
    heading: Option<String>,
    body: Vec<BodyLine>,
}

impl Pending {
    fn new(label: String) -> Self {
        Self {
            label,
            heading: None,
            body: Vec::new(),
        }
    }

    fn finish(self) -> SlideRecord {
        let heading = self
            .heading
            .unwrap_or_else(|| SlideRecord::fallback_heading(&self.label));
        SlideRecord {
            ordinal_label: self.label,
            heading,
            body: self.body,
        }
    }
}

/// Tolerant parser for the slide-delimited outline convention.
#[derive(Debug, Clone, Default)]
pub struct OutlineParser;

impl OutlineParser {
    /// Create a new outline parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse raw outline text into slide records, in input order.
    ///
    /// Never fails; segments without a digit-led label or a colon on the
    /// marker line are skipped silently.
    pub fn parse(&self, outline: &str) -> Vec<SlideRecord> {
        let mut records = Vec::new();
        let mut state = State::SeekMarker;
        let mut pending: Option<Pending> = None;

        for raw_line in outline.lines() {
            let line = raw_line.trim();

            if let Some(caps) = SLIDE_MARKER_REGEX.captures(line) {
                if let Some(done) = pending.take() {
                    records.push(done.finish());
                }

                let mut slide = Pending::new(caps[1].trim().to_string());
                let rest = caps[2].trim();
                if rest.is_empty() {
                    state = State::Heading;
                } else {
                    slide.heading = Some(rest.to_string());
                    state = State::Body;
                }
                pending = Some(slide);
                continue;
            }

            match state {
                State::SeekMarker => {}
                State::Heading => {
                    if line.is_empty() {
                        continue;
                    }
                    if let Some(slide) = pending.as_mut() {
                        // The heading is taken verbatim; emphasis markers
                        // are stripped from body lines only.
                        slide.heading = Some(line.to_string());
                    }
                    state = State::Body;
                }
                State::Body => {
                    if let Some(body_line) = classify_line(line) {
                        if let Some(slide) = pending.as_mut() {
                            slide.body.push(body_line);
                        }
                    }
                }
            }
        }

        if let Some(done) = pending.take() {
            records.push(done.finish());
        }

        log::debug!("Parsed {} slide records from outline", records.len());
        records
    }
}

/// Strip bullet markers from a body line and classify it.
///
/// Returns `None` only for lines that are empty once the bullet markers
/// are trimmed; an emphasis line keeps its paragraph even when nothing
/// remains after the `*`/`#` characters are removed.
fn classify_line(line: &str) -> Option<BodyLine> {
    let stripped = line.trim_matches(|c: char| c == '-' || c == '•' || c.is_whitespace());
    if stripped.is_empty() {
        return None;
    }

    if stripped.starts_with('*') || stripped.starts_with('#') {
        let text = stripped.replace(['*', '#'], "");
        Some(BodyLine::emphasis(text.trim()))
    } else {
        Some(BodyLine::bullet(stripped))
    }
}
