//! Mutable presentation model and slide part generation.

use deck_core::theme::Color;
use deck_core::Result;

use crate::shape::{Bounds, Paragraph, Shape};
use crate::xml::XML_DECL;

/// Default slide size: 13.33in x 7.5in (16:9), in EMU.
const SLIDE_WIDTH_EMU: i64 = 12_192_000;
const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// A presentation being built for serialization.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    slides: Vec<Slide>,
    title: Option<String>,
    author: Option<String>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty slide and return a mutable reference to it.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        self.slides.last_mut().expect("slide just pushed")
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide width in EMU.
    pub fn slide_width(&self) -> i64 {
        SLIDE_WIDTH_EMU
    }

    /// Slide height in EMU.
    pub fn slide_height(&self) -> i64 {
        SLIDE_HEIGHT_EMU
    }

    /// Set the document title recorded in the core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The document title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document author recorded in the core properties.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    /// The document author, if set.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

/// A single slide being built.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    shapes: Vec<Shape>,
}

impl Slide {
    fn new() -> Self {
        Self::default()
    }

    /// Add a solid-filled rectangle. Shapes render in insertion order, so
    /// earlier shapes sit behind later ones.
    pub fn add_rectangle(&mut self, bounds: Bounds, fill: Color) {
        self.shapes.push(Shape::Rectangle { bounds, fill });
    }

    /// Add a text box with the given paragraphs.
    pub fn add_text_box(&mut self, bounds: Bounds, paragraphs: Vec<Paragraph>) {
        self.shapes.push(Shape::TextBox { bounds, paragraphs });
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Generate the slide part XML.
    pub fn generate_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECL);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );

        // Shape ids start at 2; id 1 belongs to the group above.
        for (idx, shape) in self.shapes.iter().enumerate() {
            shape.write_xml(&mut xml, idx as u32 + 2)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_slide() {
        let mut presentation = Presentation::new();
        assert_eq!(presentation.slide_count(), 0);

        presentation.add_slide();
        presentation.add_slide();
        assert_eq!(presentation.slide_count(), 2);
    }

    #[test]
    fn test_document_properties() {
        let mut presentation = Presentation::new();
        presentation.set_title("Rust in 2026");
        presentation.set_author("AutoDeck AI");

        assert_eq!(presentation.title(), Some("Rust in 2026"));
        assert_eq!(presentation.author(), Some("AutoDeck AI"));
    }

    #[test]
    fn test_slide_xml_structure() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_slide();
        slide.add_rectangle(Bounds::new(0, 0, 10, 10), Color::new(255, 255, 255));
        let xml = slide.generate_xml().unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains("<p:spTree>"));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("<a:masterClrMapping/>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_slide();
        slide.add_rectangle(Bounds::new(0, 0, 1, 1), Color::new(0, 0, 0));
        slide.add_text_box(Bounds::new(0, 0, 1, 1), Vec::new());
        let xml = slide.generate_xml().unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 3"/>"#));
    }
}
