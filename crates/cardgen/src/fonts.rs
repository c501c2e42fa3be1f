//! # Font registry
//!
//! Fonts are registered under a family name once and stay available until the
//! [`FontSet`] is dropped. Looking up a family that failed to load falls back
//! to any other registered font, which is what a browser does when a web font
//! never arrives.

use std::{collections::BTreeMap, fmt, path::Path};

use log::{info, warn};

use crate::{
    error::FontError,
    template::{BODY_FAMILY, TITLE_FAMILY},
};

/// The font files that go with the classic template, relative to the font directory
pub const DEFAULT_FONTS: [(&str, &str); 2] = [
    (TITLE_FAMILY, "GoudyMediaevalRegular.ttf"),
    (BODY_FAMILY, "MPlantin.woff2"),
];

/// Placement and advance of one rasterized glyph, in pixels
///
/// `xmin` is the offset of the bitmap from the pen position, `ymin` the offset
/// of the bottom edge of the bitmap from the baseline (positive is up).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Left edge relative to the pen position
    pub xmin: i32,
    /// Bottom edge relative to the baseline, positive upwards
    pub ymin: i32,
    /// Bitmap width
    pub width: usize,
    /// Bitmap height
    pub height: usize,
    /// Distance to the next pen position
    pub advance: f32,
}

/// Something that turns characters into coverage bitmaps
pub trait GlyphSource {
    /// Rasterize `c` at `px` pixels per em
    ///
    /// The bitmap is `width * height` coverage values in row-major order,
    /// top row first.
    fn rasterize(&self, c: char, px: f32) -> (GlyphMetrics, Vec<u8>);

    /// Horizontal kerning between two characters
    fn kern(&self, _left: char, _right: char, _px: f32) -> f32 {
        0.0
    }
}

impl GlyphSource for fontdue::Font {
    fn rasterize(&self, c: char, px: f32) -> (GlyphMetrics, Vec<u8>) {
        let (m, bitmap) = fontdue::Font::rasterize(self, c, px);
        let metrics = GlyphMetrics {
            xmin: m.xmin,
            ymin: m.ymin,
            width: m.width,
            height: m.height,
            advance: m.advance_width,
        };
        (metrics, bitmap)
    }

    fn kern(&self, left: char, right: char, px: f32) -> f32 {
        self.horizontal_kern(left, right, px).unwrap_or(0.0)
    }
}

/// The container format of a font file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontFormat {
    /// `00 01 00 00` or `true`
    TrueType,
    /// `OTTO`, CFF outlines
    OpenType,
    /// `ttcf`
    Collection,
}

impl FontFormat {
    /// Detect the format from the first four bytes
    pub fn sniff(data: &[u8]) -> Result<Self, FontError> {
        match data.get(..4) {
            Some([0x00, 0x01, 0x00, 0x00]) | Some(b"true") => Ok(Self::TrueType),
            Some(b"OTTO") => Ok(Self::OpenType),
            Some(b"ttcf") => Ok(Self::Collection),
            Some(b"wOFF") => Err(FontError::UnsupportedFormat("woff")),
            Some(b"wOF2") => Err(FontError::UnsupportedFormat("woff2")),
            _ => Err(FontError::UnknownFormat),
        }
    }
}

/// Fonts by family name
#[derive(Default)]
pub struct FontSet {
    fonts: BTreeMap<String, Box<dyn GlyphSource>>,
}

impl fmt::Debug for FontSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fonts.keys()).finish()
    }
}

impl FontSet {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a glyph source under `family`
    ///
    /// Returns `false` and keeps the existing font if the family is taken.
    pub fn insert<G: GlyphSource + 'static>(&mut self, family: &str, font: G) -> bool {
        if self.fonts.contains_key(family) {
            warn!("Font family '{}' is already registered", family);
            return false;
        }
        self.fonts.insert(family.to_owned(), Box::new(font));
        true
    }

    /// Parse a TrueType / OpenType font and register it under `family`
    pub fn load_bytes(&mut self, family: &str, data: Vec<u8>) -> Result<(), FontError> {
        let format = FontFormat::sniff(&data)?;
        let face_name = {
            let face = ttf_parser::Face::parse(&data, 0)
                .map_err(|e| FontError::Parse(e.to_string()))?;
            face_family_name(&face)
        };
        let settings = fontdue::FontSettings {
            collection_index: 0,
            scale: 40.0,
            load_substitutions: true,
        };
        let font = fontdue::Font::from_bytes(data, settings)
            .map_err(|e| FontError::Parse(e.to_string()))?;
        info!(
            "Loaded font '{}' ({:?}, {}) as '{}'",
            face_name.as_deref().unwrap_or("<unnamed>"),
            format,
            font.glyph_count(),
            family
        );
        self.insert(family, font);
        Ok(())
    }

    /// Read a font file and register it under `family`
    pub fn load(&mut self, family: &str, path: &Path) -> Result<(), FontError> {
        let data = std::fs::read(path)?;
        self.load_bytes(family, data)
    }

    /// Like [`FontSet::load`], but only logs a warning on failure
    pub fn load_or_warn(&mut self, family: &str, path: &Path) -> bool {
        match self.load(family, path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Font '{}' from {} unavailable: {}", family, path.display(), e);
                false
            }
        }
    }

    /// Whether `family` has been registered
    pub fn contains(&self, family: &str) -> bool {
        self.fonts.contains_key(family)
    }

    /// The font registered as `family`
    pub fn get(&self, family: &str) -> Option<&dyn GlyphSource> {
        self.fonts.get(family).map(|font| &**font)
    }

    /// The font for `family`, or the first registered font if it is missing
    pub fn resolve(&self, family: &str) -> Option<(&str, &dyn GlyphSource)> {
        if let Some((name, font)) = self.fonts.get_key_value(family) {
            return Some((name.as_str(), &**font));
        }
        self.fonts
            .iter()
            .next()
            .map(|(name, font)| (name.as_str(), &**font))
    }

    /// The registered family names in sorted order
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    /// Number of registered families
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no font is registered
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn face_family_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
        .find_map(|name| name.to_string())
}
