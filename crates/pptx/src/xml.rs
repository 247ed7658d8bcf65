//! XML generation helpers shared by the part writers.

/// Declaration prepended to every generated part.
pub(crate) const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// English Metric Units per inch.
pub(crate) const EMU_PER_INCH: i64 = 914_400;

/// Convert inches to EMU.
pub(crate) fn emu_from_inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// Font size in DrawingML hundredths of a point.
pub(crate) fn font_size_attr(points: f64) -> i64 {
    (points * 100.0).round() as i64
}

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_from_inches() {
        assert_eq!(emu_from_inches(1.0), 914_400);
        assert_eq!(emu_from_inches(0.5), 457_200);
        assert_eq!(emu_from_inches(7.5), 6_858_000);
    }

    #[test]
    fn test_font_size_attr() {
        assert_eq!(font_size_attr(40.0), 4000);
        assert_eq!(font_size_attr(12.0), 1200);
        assert_eq!(font_size_attr(10.5), 1050);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_xml(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
