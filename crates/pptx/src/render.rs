//! Deck rendering from parsed outline records.
//!
//! Maps each record onto one slide in the fixed branded layout: tinted
//! full-bleed background, styled title, emphasis/bullet body paragraphs,
//! and the footer line.

use deck_core::{BodyLineKind, DeckTheme, SlideRecord};

use crate::presentation::{Presentation, Slide};
use crate::shape::{Bounds, Paragraph};

/// Title box geometry in inches (x, y, width, height).
const TITLE_BOX_IN: (f64, f64, f64, f64) = (0.5, 0.3, 12.33, 1.2);

/// Body box geometry in inches.
const BODY_BOX_IN: (f64, f64, f64, f64) = (0.5, 1.7, 12.33, 5.1);

/// Footer box geometry in inches.
const FOOTER_BOX_IN: (f64, f64, f64, f64) = (0.3, 7.0, 12.0, 0.5);

fn box_bounds(rect: (f64, f64, f64, f64)) -> Bounds {
    Bounds::from_inches(rect.0, rect.1, rect.2, rect.3)
}

/// Renders parsed slide records into a styled presentation.
#[derive(Debug, Clone)]
pub struct DeckRenderer {
    theme: DeckTheme,
    brand: String,
}

impl DeckRenderer {
    /// Create a renderer with the default theme.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            theme: DeckTheme::default(),
            brand: brand.into(),
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: DeckTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Build one slide per record, in record order.
    ///
    /// Renders exactly as many slides as there are records; the requested
    /// slide count upstream is advisory and never enforced here.
    pub fn render(&self, records: &[SlideRecord]) -> Presentation {
        let mut presentation = Presentation::new();
        presentation.set_author(self.brand.as_str());
        if let Some(first) = records.first() {
            presentation.set_title(first.heading.as_str());
        }

        let width = presentation.slide_width();
        let height = presentation.slide_height();

        for record in records {
            let slide = presentation.add_slide();
            self.render_slide(slide, record, width, height);
        }

        log::debug!("Rendered {} slides", presentation.slide_count());
        presentation
    }

    fn render_slide(&self, slide: &mut Slide, record: &SlideRecord, width: i64, height: i64) {
        // Background first: z-order follows shape-tree order, so every
        // later shape draws over it.
        slide.add_rectangle(Bounds::new(0, 0, width, height), self.theme.background_fill);

        slide.add_text_box(
            box_bounds(TITLE_BOX_IN),
            vec![Paragraph::new(
                record.heading.as_str(),
                self.theme.title_font_size,
                self.theme.title_color,
            )
            .with_bold(true)],
        );

        let body: Vec<Paragraph> = record
            .body
            .iter()
            .map(|line| match line.kind {
                BodyLineKind::Emphasis => Paragraph::new(
                    line.text.as_str(),
                    self.theme.emphasis_font_size,
                    self.theme.emphasis_color,
                )
                .with_bold(true),
                BodyLineKind::Bullet => Paragraph::new(
                    line.text.as_str(),
                    self.theme.bullet_font_size,
                    self.theme.bullet_color,
                )
                .with_level(1)
                .with_bullet(true),
            })
            .collect();

        if !body.is_empty() {
            slide.add_text_box(box_bounds(BODY_BOX_IN), body);
        }

        slide.add_text_box(
            box_bounds(FOOTER_BOX_IN),
            vec![Paragraph::new(
                self.theme.footer_text(&self.brand),
                self.theme.footer_font_size,
                self.theme.footer_color,
            )],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use deck_core::BodyLine;

    fn record(heading: &str, lines: Vec<BodyLine>) -> SlideRecord {
        let mut record = SlideRecord::new("1", heading);
        for line in lines {
            record.push_line(line);
        }
        record
    }

    #[test]
    fn test_one_slide_per_record() {
        let records = vec![
            record("A", vec![BodyLine::bullet("x")]),
            record("B", vec![]),
            record("C", vec![BodyLine::emphasis("y")]),
        ];

        let deck = DeckRenderer::new("Acme").render(&records);
        assert_eq!(deck.slide_count(), 3);
    }

    #[test]
    fn test_background_sits_behind_content() {
        let deck = DeckRenderer::new("Acme").render(&[record("A", vec![BodyLine::bullet("x")])]);
        let shapes = deck.slides()[0].shapes();

        match &shapes[0] {
            Shape::Rectangle { bounds, fill } => {
                assert_eq!(bounds.x, 0);
                assert_eq!(bounds.y, 0);
                assert_eq!(bounds.width, deck.slide_width());
                assert_eq!(bounds.height, deck.slide_height());
                assert_eq!(fill.hex(), "F0F5FF");
            }
            other => panic!("expected background rectangle first, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_renders_title_and_footer_only() {
        let deck = DeckRenderer::new("Acme").render(&[record("Just a title", vec![])]);
        let shapes = deck.slides()[0].shapes();

        // Background, title box, footer box; no body box.
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn test_footer_on_every_slide() {
        let records = vec![record("A", vec![]), record("B", vec![])];
        let deck = DeckRenderer::new("AutoDeck AI").render(&records);

        for slide in deck.slides() {
            let has_footer = slide.shapes().iter().any(|shape| match shape {
                Shape::TextBox { paragraphs, .. } => paragraphs
                    .iter()
                    .any(|p| p.text == "AutoDeck AI | Auto-Generated Deck"),
                _ => false,
            });
            assert!(has_footer);
        }
    }

    #[test]
    fn test_body_line_styling() {
        let deck = DeckRenderer::new("Acme").render(&[record(
            "T",
            vec![BodyLine::emphasis("Header"), BodyLine::bullet("detail")],
        )]);
        let shapes = deck.slides()[0].shapes();

        let body = match &shapes[2] {
            Shape::TextBox { paragraphs, .. } => paragraphs,
            other => panic!("expected body text box, got {:?}", other),
        };

        assert_eq!(body[0].text, "Header");
        assert!(body[0].bold);
        assert_eq!(body[0].level, 0);
        assert!(!body[0].bullet);
        assert_eq!(body[0].font_size, 26.0);

        assert_eq!(body[1].text, "detail");
        assert!(!body[1].bold);
        assert_eq!(body[1].level, 1);
        assert!(body[1].bullet);
        assert_eq!(body[1].font_size, 24.0);
    }

    #[test]
    fn test_heading_used_verbatim() {
        let deck = DeckRenderer::new("Acme").render(&[record("*Key Trend*", vec![])]);
        let shapes = deck.slides()[0].shapes();

        match &shapes[1] {
            Shape::TextBox { paragraphs, .. } => {
                assert_eq!(paragraphs[0].text, "*Key Trend*");
                assert_eq!(paragraphs[0].font_size, 40.0);
                assert!(paragraphs[0].bold);
            }
            other => panic!("expected title text box, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_theme_changes_background() {
        use deck_core::theme::{Color, DeckTheme};

        let theme = DeckTheme::default()
            .with_background_fill(Color::new(255, 255, 255))
            .with_title_color(Color::new(0, 0, 0));
        let renderer = DeckRenderer::new("Acme").with_theme(theme);
        let deck = renderer.render(&[record("A", vec![])]);

        match &deck.slides()[0].shapes()[0] {
            Shape::Rectangle { fill, .. } => assert_eq!(fill.hex(), "FFFFFF"),
            other => panic!("expected background rectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_document_metadata() {
        let deck = DeckRenderer::new("Acme").render(&[record("First Heading", vec![])]);

        assert_eq!(deck.title(), Some("First Heading"));
        assert_eq!(deck.author(), Some("Acme"));
    }
}
