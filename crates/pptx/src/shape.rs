//! Shape and paragraph types with their slide XML generation.

use deck_core::theme::Color;
use deck_core::{Error, Result};
use std::fmt::Write as FmtWrite;

use crate::xml::{emu_from_inches, escape_xml, font_size_attr};

/// Rectangular bounds in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    /// Create bounds from EMU coordinates.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create bounds from inch coordinates.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: emu_from_inches(x),
            y: emu_from_inches(y),
            width: emu_from_inches(width),
            height: emu_from_inches(height),
        }
    }
}

/// One styled paragraph inside a text box.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Run text.
    pub text: String,

    /// Size in points.
    pub font_size: f64,

    /// Bold run.
    pub bold: bool,

    /// Run color.
    pub color: Color,

    /// Outline level (0 = top level).
    pub level: u8,

    /// Whether a bullet glyph is shown.
    pub bullet: bool,
}

impl Paragraph {
    /// Create a plain paragraph at outline level 0 with no bullet glyph.
    pub fn new(text: impl Into<String>, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            bold: false,
            color,
            level: 0,
            bullet: false,
        }
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder method: set the outline level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Builder method: show a bullet glyph.
    pub fn with_bullet(mut self, bullet: bool) -> Self {
        self.bullet = bullet;
        self
    }

    /// Write this paragraph as an `<a:p>` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        // Bulleted paragraphs get a hanging indent so wrapped lines align
        // behind the glyph.
        let indent = if self.bullet {
            r#" marL="342900" indent="-342900""#
        } else {
            ""
        };
        write!(xml, r#"<a:pPr lvl="{}"{}>"#, self.level, indent)
            .map_err(|e| Error::XmlError(e.to_string()))?;
        if self.bullet {
            xml.push_str(r#"<a:buFont typeface="Arial" pitchFamily="34" charset="0"/>"#);
            xml.push_str(r#"<a:buChar char="•"/>"#);
        } else {
            xml.push_str("<a:buNone/>");
        }
        xml.push_str("</a:pPr>");

        let bold = if self.bold { r#" b="1""# } else { "" };
        write!(
            xml,
            r#"<a:r><a:rPr lang="en-US" sz="{}"{} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r>"#,
            font_size_attr(self.font_size),
            bold,
            self.color.hex(),
            escape_xml(&self.text)
        )
        .map_err(|e| Error::XmlError(e.to_string()))?;

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Solid-filled rectangle with no outline.
    Rectangle { bounds: Bounds, fill: Color },

    /// Text box with explicitly styled paragraphs.
    TextBox {
        bounds: Bounds,
        paragraphs: Vec<Paragraph>,
    },
}

impl Shape {
    /// Write this shape as a `<p:sp>` element. `shape_id` must be unique
    /// within the slide.
    pub(crate) fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        match self {
            Shape::Rectangle { bounds, fill } => write_rectangle(xml, shape_id, bounds, *fill),
            Shape::TextBox { bounds, paragraphs } => {
                write_text_box(xml, shape_id, bounds, paragraphs)
            }
        }
    }
}

fn write_rectangle(xml: &mut String, shape_id: u32, bounds: &Bounds, fill: Color) -> Result<()> {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{fill}"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#,
        id = shape_id,
        x = bounds.x,
        y = bounds.y,
        cx = bounds.width,
        cy = bounds.height,
        fill = fill.hex()
    )
    .map_err(|e| Error::XmlError(e.to_string()))
}

fn write_text_box(
    xml: &mut String,
    shape_id: u32,
    bounds: &Bounds,
    paragraphs: &[Paragraph],
) -> Result<()> {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>"#,
        id = shape_id,
        x = bounds.x,
        y = bounds.y,
        cx = bounds.width,
        cy = bounds.height
    )
    .map_err(|e| Error::XmlError(e.to_string()))?;

    if paragraphs.is_empty() {
        xml.push_str("<a:p/>");
    } else {
        for paragraph in paragraphs {
            paragraph.write_xml(xml)?;
        }
    }

    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}
