//! # The card layout
//!
//! Every text on the card is drawn as a [`TextLayer`]. Positions are given in
//! the coordinate system of the layer, i.e. they are multiplied by the layer
//! scale just like a `scale` transform on a 2D canvas context would do. Shadow
//! offsets and blur are not affected by the scale.

/// Font family used for the card name
pub const TITLE_FAMILY: &str = "goudy";
/// Font family used for the type line and rules text
pub const BODY_FAMILY: &str = "mplantin";

/// A straight (non-premultiplied) RGBA color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is opaque
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque red
    pub const RED: Color = Color::rgb(0xFF, 0, 0);
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// A CSS color string, `#rrggbb` or `#rrggbbaa`
    pub fn to_css(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A drop shadow behind a text layer
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    /// Horizontal offset in canvas pixels
    pub offset_x: f32,
    /// Vertical offset in canvas pixels
    pub offset_y: f32,
    /// Blur radius as used by `shadowBlur`, the gaussian sigma is half of it
    pub blur: f32,
    /// Shadow color
    pub color: Color,
}

/// Style and position of one line (or block of lines) of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    /// Font family, looked up in the registered fonts
    pub family: &'static str,
    /// Font size in pixels
    pub size: f32,
    /// Horizontal and vertical scale applied to glyphs and position
    pub scale: (f32, f32),
    /// Extra space after each glyph in pixels
    pub letter_spacing: f32,
    /// Text color
    pub fill: Color,
    /// Drop shadow, if any
    pub shadow: Option<Shadow>,
    /// Left end of the first baseline, in layer coordinates
    pub x: f32,
    /// Baseline of the first line, in layer coordinates
    pub y: f32,
    /// Distance between baselines in layer coordinates
    pub line_height: f32,
}

impl TextLayer {
    /// Map a point in layer coordinates onto the canvas
    pub fn to_device(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale.0, y * self.scale.1)
    }

    /// The layer coordinates of the baseline of the `index`-th line
    pub fn line_position(&self, index: usize) -> (f32, f32) {
        (self.x, self.y + self.line_height * index as f32)
    }

    /// The CSS font shorthand, e.g. `35px goudy`
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }

    fn new(family: &'static str, size: f32, x: f32, y: f32) -> Self {
        Self {
            family,
            size,
            scale: (1.0, 1.0),
            letter_spacing: 1.0,
            fill: Color::WHITE,
            shadow: None,
            x,
            y,
            line_height: size * 1.2,
        }
    }
}

/// The three text layers of a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardTemplate {
    /// The card name at the top
    pub title: TextLayer,
    /// The type line in the middle
    pub type_line: TextLayer,
    /// The rules text box
    pub rules: TextLayer,
}

impl Default for CardTemplate {
    fn default() -> Self {
        Self::classic()
    }
}

impl CardTemplate {
    /// The classic frame for `ucard.png`
    pub fn classic() -> Self {
        Self {
            title: TextLayer {
                scale: (1.1, 1.0),
                shadow: Some(Shadow {
                    offset_x: 2.0,
                    offset_y: 2.0,
                    blur: 1.0,
                    color: Color::BLACK,
                }),
                ..TextLayer::new(TITLE_FAMILY, 35.0, 60.0, 76.0)
            },
            type_line: TextLayer {
                scale: (0.9, 1.0),
                shadow: Some(Shadow {
                    offset_x: 1.0,
                    offset_y: 1.0,
                    blur: 1.0,
                    color: Color::BLACK,
                }),
                ..TextLayer::new(BODY_FAMILY, 35.0, 85.0, 614.0)
            },
            rules: TextLayer {
                fill: Color::BLACK,
                ..TextLayer::new(BODY_FAMILY, 28.0, 100.0, 700.0)
            },
        }
    }

    /// All layers, in drawing order
    pub fn layers(&self) -> [&TextLayer; 3] {
        [&self.title, &self.type_line, &self.rules]
    }

    /// The distinct font families used by this template
    pub fn families(&self) -> Vec<&'static str> {
        let mut families: Vec<&'static str> = Vec::new();
        for layer in self.layers() {
            if !families.contains(&layer.family) {
                families.push(layer.family);
            }
        }
        families
    }
}

#[cfg(test)]
mod tests {
    use super::{CardTemplate, Color, BODY_FAMILY, TITLE_FAMILY};

    #[test]
    fn test_css_color() {
        assert_eq!(Color::RED.to_css(), "#ff0000");
        assert_eq!(Color::rgb(0x12, 0xab, 0).to_css(), "#12ab00");
        assert_eq!(Color::TRANSPARENT.to_css(), "#00000000");
    }

    #[test]
    fn test_classic_template() {
        let t = CardTemplate::classic();
        assert_eq!(t.title.to_device(t.title.x, t.title.y), (66.0, 76.0));
        assert_eq!(t.title.css_font(), "35px goudy");
        assert_eq!(t.rules.css_font(), "28px mplantin");
        assert_eq!(t.type_line.to_device(85.0, 614.0), (85.0 * 0.9, 614.0));
        assert!(t.rules.shadow.is_none());
        assert_eq!(t.rules.fill, Color::BLACK);
        assert_eq!(t.families(), vec![TITLE_FAMILY, BODY_FAMILY]);
        assert_eq!(t.rules.line_position(0), (100.0, 700.0));
        assert_eq!(t.rules.line_position(2).1, 700.0 + t.rules.line_height * 2.0);
    }
}
