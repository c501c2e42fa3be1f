//! # In-memory rasterizer
//!
//! [`Canvas`] is a [`Surface`] backed by a [`tiny_skia::Pixmap`]. Text is
//! rasterized with the glyph sources registered in its [`FontSet`].

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, warn};
use tiny_skia::{
    ColorU8, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

use crate::{
    error::RenderError,
    fonts::FontSet,
    surface::Surface,
    template::{Color, TextLayer},
    CANVAS_HEIGHT, CANVAS_WIDTH,
};

pub mod compose;
pub mod text;

use text::TextRun;

/// Decode a background image from a file
pub fn load_image(path: &Path) -> Result<RgbaImage, RenderError> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}

fn to_pixmap(image: &RgbaImage) -> Result<Pixmap, RenderError> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Bitmap { width, height })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

/// A fixed-size RGBA canvas
pub struct Canvas {
    pixmap: Pixmap,
    fonts: FontSet,
}

impl Canvas {
    /// A transparent canvas of the card size
    pub fn new(fonts: FontSet) -> Result<Self, RenderError> {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT, fonts)
    }

    /// A transparent canvas of any size
    pub fn with_size(width: u32, height: u32, fonts: FontSet) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Bitmap { width, height })?;
        Ok(Self { pixmap, fonts })
    }

    /// A copy of the current pixels, without premultiplied alpha
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Write the current pixels to a PNG file
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.to_image().save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Surface for Canvas {
    type Image = RgbaImage;
    type Error = RenderError;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn image_size(image: &RgbaImage) -> (u32, u32) {
        image.dimensions()
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        let rect = match Rect::from_xywh(x, y, w, h) {
            Some(rect) => rect,
            None => return Ok(()),
        };
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, size: (u32, u32)) -> Result<(), RenderError> {
        if size.0 == 0 || size.1 == 0 || image.width() == 0 || image.height() == 0 {
            warn!("Skipping empty background image");
            return Ok(());
        }
        let background = to_pixmap(image)?;
        let (paint, transform) = if size == image.dimensions() {
            (PixmapPaint::default(), Transform::identity())
        } else {
            let paint = PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..PixmapPaint::default()
            };
            let sx = size.0 as f32 / image.width() as f32;
            let sy = size.1 as f32 / image.height() as f32;
            (paint, Transform::from_scale(sx, sy))
        };
        self.pixmap
            .draw_pixmap(0, 0, background.as_ref(), &paint, transform, None);
        Ok(())
    }

    fn fill_text(
        &mut self,
        layer: &TextLayer,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), RenderError> {
        let (name, font) = match self.fonts.resolve(layer.family) {
            Some(found) => found,
            None => {
                warn!("No font available, skipping {:?}", text);
                return Ok(());
            }
        };
        if name != layer.family {
            debug!("Font '{}' missing, using '{}'", layer.family, name);
        }

        let run = TextRun::layout(font, text, layer.size, layer.letter_spacing);
        let mask = match run.to_mask() {
            Some(mask) => mask.scaled(layer.scale.0, layer.scale.1),
            None => return Ok(()),
        };
        let (ox, oy) = layer.to_device(x, y);

        if let Some(shadow) = &layer.shadow {
            let shadow_mask = mask.blurred(shadow.blur / 2.0);
            shadow_mask.fill(
                &mut self.pixmap,
                ox + shadow.offset_x,
                oy + shadow.offset_y,
                shadow.color,
            );
        }
        mask.fill(&mut self.pixmap, ox, oy, layer.fill);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::Canvas;
    use crate::{
        error::RenderError,
        fonts::FontSet,
        surface::{draw_debug_border, Surface},
    };

    #[test]
    fn test_debug_border() {
        let mut canvas = Canvas::new(FontSet::new()).unwrap();
        draw_debug_border(&mut canvas).unwrap();
        let px = canvas.to_image();
        assert_eq!(px.dimensions(), (750, 1050));

        // The 1px line is centered on the canvas edge, half of it is outside
        for (x, y) in [(0, 500), (375, 0), (749, 500), (375, 1049)] {
            let [r, g, b, a] = px.get_pixel(x, y).0;
            assert!(r > 250 && g == 0 && b == 0, "({}, {}) is not red", x, y);
            assert!((100..=160).contains(&a), "({}, {}) has alpha {}", x, y, a);
        }
        let corner = px.get_pixel(0, 0).0[3];
        assert!(corner > px.get_pixel(0, 500).0[3] && corner < 255);

        assert_eq!(px.get_pixel(1, 1).0[3], 0);
        assert_eq!(px.get_pixel(748, 1048).0[3], 0);
        let inked = px.pixels().filter(|p| p.0[3] > 0).count();
        assert_eq!(inked, 2 * 750 + 2 * 1048);
    }

    #[test]
    fn test_draw_image() {
        let mut canvas = Canvas::with_size(20, 10, FontSet::new()).unwrap();
        let bg = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        canvas.draw_image(&bg, (4, 4)).unwrap();
        assert_eq!(canvas.to_image().get_pixel(3, 3).0, [0, 0, 255, 255]);
        assert_eq!(canvas.to_image().get_pixel(4, 3).0[3], 0);

        canvas.clear();
        assert!(canvas.to_image().pixels().all(|p| p.0[3] == 0));
        canvas.draw_image(&bg, (10, 10)).unwrap();
        let px = canvas.to_image();
        let [r, _, b, a] = px.get_pixel(9, 9).0;
        assert!(r < 5 && b > 250 && a > 250);
        assert_eq!(px.get_pixel(10, 9).0[3], 0);
    }

    #[test]
    fn test_empty_canvas() {
        assert!(matches!(
            Canvas::with_size(0, 10, FontSet::new()),
            Err(RenderError::Bitmap {
                width: 0,
                height: 10
            })
        ));
    }
}
