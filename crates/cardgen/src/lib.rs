#![warn(missing_docs)]
//! # Trading card rendering
//!
//! This crate draws a single trading card onto a fixed-size canvas: a
//! background image, followed by the title, the type line and the rules text,
//! each with its own font, horizontal scale, fill color and drop shadow.
//!
//! Drawing goes through the [`Surface`] trait. The `raster` feature (enabled
//! by default) provides [`raster::Canvas`], an in-memory `tiny-skia` pixmap
//! that rasterizes glyphs with `fontdue`; the `card-web` crate implements the
//! same trait on top of an HTML canvas.

pub mod card;
pub mod error;
pub mod geometry;
#[cfg(feature = "raster")]
pub mod fonts;
#[cfg(feature = "raster")]
pub mod raster;
pub mod surface;
pub mod template;

pub use card::{Card, CardText, Cost, Rarity};
pub use error::{CostError, FontError, RenderError};
pub use geometry::{aspect_fit_ratio, BackgroundFit};
pub use surface::{draw_background, draw_card, draw_debug_border, render_card, Surface};
pub use template::{CardTemplate, Color, Shadow, TextLayer};

/// Width of the card canvas in pixels (6.35cm at 300 px/inch)
pub const CANVAS_WIDTH: u32 = 750;
/// Height of the card canvas in pixels (8.89cm at 300 px/inch)
pub const CANVAS_HEIGHT: u32 = 1050;
