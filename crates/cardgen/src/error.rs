//! Errors produced while loading assets and drawing cards

use std::io;

use thiserror::*;

/// Failed to load or register a font
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read
    #[error("Failed to read font file")]
    Io(#[from] io::Error),
    /// The data is a font container the rasterizer can't parse
    #[error("Unsupported font format '{0}'")]
    UnsupportedFormat(&'static str),
    /// The data does not start with any known font signature
    #[error("Not a font file")]
    UnknownFormat,
    /// The font tables are malformed
    #[error("Failed to parse font: {0}")]
    Parse(String),
}

/// Failed to parse a mana cost
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostError {
    /// The cost does not have the shape `<generic><colors>`
    #[error("Invalid mana cost {0:?}, expected e.g. `2WU`")]
    Malformed(String),
    /// The generic part does not fit into an integer
    #[error("Generic mana amount out of range")]
    Overflow,
}

/// Failed to draw onto a raster canvas
#[derive(Debug, Error)]
pub enum RenderError {
    /// An intermediate bitmap could not be constructed
    #[error("Invalid bitmap of {width}x{height} pixels")]
    Bitmap {
        /// The requested width
        width: u32,
        /// The requested height
        height: u32,
    },
    /// Decoding or encoding an image failed
    #[cfg(feature = "raster")]
    #[error("Image error")]
    Image(#[from] image::ImageError),
}
