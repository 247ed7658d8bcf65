//! Deck styling configuration.
//!
//! All visual constants live in one structure so a theme change never
//! touches the rendering logic. A single fixed default ships; nothing is
//! user-selectable at runtime.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form used in DrawingML attributes, e.g. `"003366"`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Visual theme for generated decks.
///
/// Font sizes are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckTheme {
    /// Slide title size.
    pub title_font_size: f64,

    /// Size of emphasis (sub-heading) body lines.
    pub emphasis_font_size: f64,

    /// Size of plain bullet lines.
    pub bullet_font_size: f64,

    /// Footer text size.
    pub footer_font_size: f64,

    /// Slide title color.
    pub title_color: Color,

    /// Emphasis line color.
    pub emphasis_color: Color,

    /// Bullet line color.
    pub bullet_color: Color,

    /// Footer text color.
    pub footer_color: Color,

    /// Full-bleed background tint painted behind all content.
    pub background_fill: Color,

    /// Footer template; `{brand}` is replaced with the brand label.
    pub footer_template: String,
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            title_font_size: 40.0,
            emphasis_font_size: 26.0,
            bullet_font_size: 24.0,
            footer_font_size: 12.0,
            title_color: Color::new(0, 51, 102),
            emphasis_color: Color::new(0, 102, 204),
            bullet_color: Color::new(50, 50, 50),
            footer_color: Color::new(100, 100, 100),
            background_fill: Color::new(240, 245, 255),
            footer_template: "{brand} | Auto-Generated Deck".to_string(),
        }
    }
}

impl DeckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background tint.
    pub fn with_background_fill(mut self, fill: Color) -> Self {
        self.background_fill = fill;
        self
    }

    /// Set the title color.
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Set the footer template. `{brand}` marks the brand label position.
    pub fn with_footer_template(mut self, template: impl Into<String>) -> Self {
        self.footer_template = template.into();
        self
    }

    /// Render the footer line for a brand label.
    pub fn footer_text(&self, brand: &str) -> String {
        self.footer_template.replace("{brand}", brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::new(0, 51, 102).hex(), "003366");
        assert_eq!(Color::new(240, 245, 255).hex(), "F0F5FF");
        assert_eq!(Color::new(255, 255, 255).hex(), "FFFFFF");
    }

    #[test]
    fn test_footer_text_substitution() {
        let theme = DeckTheme::default();
        assert_eq!(
            theme.footer_text("AutoDeck AI"),
            "AutoDeck AI | Auto-Generated Deck"
        );
    }

    #[test]
    fn test_custom_footer_template() {
        let theme = DeckTheme::default().with_footer_template("deck by {brand}");
        assert_eq!(theme.footer_text("Acme"), "deck by Acme");
    }

    #[test]
    fn test_default_styling_constants() {
        let theme = DeckTheme::default();
        assert_eq!(theme.title_font_size, 40.0);
        assert_eq!(theme.bullet_font_size, 24.0);
        assert_eq!(theme.title_color, Color::new(0, 51, 102));
        assert_eq!(theme.background_fill, Color::new(240, 245, 255));
    }
}
