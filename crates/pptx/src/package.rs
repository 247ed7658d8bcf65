//! OPC package assembly.
//!
//! A .pptx file is a ZIP archive of XML parts. The static parts come from
//! `template`; the content-types, presentation, relationship, and slide
//! parts are generated from the model.

use deck_core::{Error, Result};
use std::fmt::Write as FmtWrite;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::presentation::Presentation;
use crate::template;
use crate::xml::{escape_xml, XML_DECL};

impl Presentation {
    /// Serialize the package to any seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        write_package(self, writer)
    }

    /// Write the `.pptx` package to a file path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(std::io::BufWriter::new(file))?;
        log::debug!("Wrote deck package to {}", path.as_ref().display());
        Ok(())
    }
}

fn write_package<W: Write + Seek>(presentation: &Presentation, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    write_part(
        &mut zip,
        options,
        "[Content_Types].xml",
        &content_types_xml(presentation.slide_count())?,
    )?;
    write_part(&mut zip, options, "_rels/.rels", template::ROOT_RELS)?;
    write_part(
        &mut zip,
        options,
        "docProps/core.xml",
        &core_props_xml(presentation),
    )?;
    write_part(&mut zip, options, "docProps/app.xml", template::APP_PROPS)?;
    write_part(
        &mut zip,
        options,
        "ppt/presentation.xml",
        &presentation_xml(presentation)?,
    )?;
    write_part(
        &mut zip,
        options,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(presentation.slide_count())?,
    )?;
    write_part(
        &mut zip,
        options,
        "ppt/slideMasters/slideMaster1.xml",
        template::SLIDE_MASTER,
    )?;
    write_part(
        &mut zip,
        options,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        template::SLIDE_MASTER_RELS,
    )?;
    write_part(
        &mut zip,
        options,
        "ppt/slideLayouts/slideLayout1.xml",
        template::SLIDE_LAYOUT,
    )?;
    write_part(
        &mut zip,
        options,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        template::SLIDE_LAYOUT_RELS,
    )?;
    write_part(&mut zip, options, "ppt/theme/theme1.xml", template::THEME)?;

    for (idx, slide) in presentation.slides().iter().enumerate() {
        let number = idx + 1;
        write_part(
            &mut zip,
            options,
            &format!("ppt/slides/slide{}.xml", number),
            &slide.generate_xml()?,
        )?;
        write_part(
            &mut zip,
            options,
            &format!("ppt/slides/_rels/slide{}.xml.rels", number),
            template::SLIDE_RELS,
        )?;
    }

    let mut inner = zip
        .finish()
        .map_err(|e| Error::ZipError(format!("Failed to finalize archive: {}", e)))?;
    inner.flush()?;
    Ok(())
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    name: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| Error::ZipError(format!("Failed to start part '{}': {}", name, e)))?;
    zip.write_all(content.as_bytes())
        .map_err(|e| Error::ZipError(format!("Failed to write part '{}': {}", name, e)))?;
    Ok(())
}

/// Generate `[Content_Types].xml` with one override per slide.
fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);

    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            number
        )
        .map_err(|e| Error::XmlError(e.to_string()))?;
    }

    xml.push_str("</Types>");
    Ok(xml)
}

/// Generate `ppt/presentation.xml`: master list, slide list, slide size.
fn presentation_xml(presentation: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    );
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

    if presentation.slide_count() > 0 {
        xml.push_str("<p:sldIdLst>");
        for idx in 0..presentation.slide_count() {
            // Slide ids live in their own namespace starting at 256;
            // rId1 is the master, so slides start at rId2.
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                256 + idx,
                idx + 2
            )
            .map_err(|e| Error::XmlError(e.to_string()))?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        presentation.slide_width(),
        presentation.slide_height()
    )
    .map_err(|e| Error::XmlError(e.to_string()))?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Generate `ppt/_rels/presentation.xml.rels`: master plus one entry per
/// slide, matching the ids used in `presentation_xml`.
fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#);

    for idx in 0..slide_count {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            idx + 2,
            idx + 1
        )
        .map_err(|e| Error::XmlError(e.to_string()))?;
    }

    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Generate `docProps/core.xml` carrying title and creator.
fn core_props_xml(presentation: &Presentation) -> String {
    format!(
        r#"{}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>"#,
        XML_DECL,
        escape_xml(presentation.title().unwrap_or_default()),
        escape_xml(presentation.author().unwrap_or_default())
    )
}
