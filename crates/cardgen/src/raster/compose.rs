//! Coverage masks and their compositing onto a pixmap

use image::{imageops, GrayImage, Luma};
use tiny_skia::{ColorU8, FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::template::Color;

/// A coverage bitmap with an offset relative to some origin
#[derive(Debug, Clone)]
pub struct Mask {
    /// One coverage value per pixel
    pub coverage: GrayImage,
    /// Horizontal offset of the top left corner
    pub left: f32,
    /// Vertical offset of the top left corner
    pub top: f32,
}

impl Mask {
    /// Resample the mask, offsets included
    pub fn scaled(&self, sx: f32, sy: f32) -> Mask {
        if sx == 1.0 && sy == 1.0 {
            return self.clone();
        }
        let (w, h) = self.coverage.dimensions();
        let nw = ((w as f32 * sx).round() as u32).max(1);
        let nh = ((h as f32 * sy).round() as u32).max(1);
        let resampled = match (self.paint(Color::BLACK), Pixmap::new(nw, nh)) {
            (Some(src), Some(mut dst)) => {
                let paint = PixmapPaint {
                    quality: FilterQuality::Bilinear,
                    ..PixmapPaint::default()
                };
                let transform = Transform::from_scale(nw as f32 / w as f32, nh as f32 / h as f32);
                dst.draw_pixmap(0, 0, src.as_ref(), &paint, transform, None);
                dst
            }
            _ => return self.clone(),
        };
        Mask {
            coverage: alpha_image(&resampled),
            left: self.left * sx,
            top: self.top * sy,
        }
    }

    /// A gaussian-blurred copy, grown so the blur isn't clipped
    pub fn blurred(&self, sigma: f32) -> Mask {
        if sigma <= 0.0 {
            return self.clone();
        }
        let pad = (sigma * 3.0).ceil() as u32 + 1;
        let (w, h) = self.coverage.dimensions();
        let mut padded = GrayImage::new(w + 2 * pad, h + 2 * pad);
        imageops::replace(&mut padded, &self.coverage, pad as i64, pad as i64);
        Mask {
            coverage: imageops::blur(&padded, sigma),
            left: self.left - pad as f32,
            top: self.top - pad as f32,
        }
    }

    /// The opaque color of `color`, with the coverage as alpha
    ///
    /// `None` for an empty mask.
    pub fn paint(&self, color: Color) -> Option<Pixmap> {
        let (w, h) = self.coverage.dimensions();
        let mut pixmap = Pixmap::new(w, h)?;
        for (dst, cov) in pixmap.pixels_mut().iter_mut().zip(self.coverage.pixels()) {
            *dst = ColorU8::from_rgba(color.r, color.g, color.b, cov.0[0]).premultiply();
        }
        Some(pixmap)
    }

    /// Paint `color` through the mask onto `target`, with the mask origin at `(x, y)`
    pub fn fill(&self, target: &mut Pixmap, x: f32, y: f32, color: Color) {
        let glyphs = match self.paint(color) {
            Some(glyphs) => glyphs,
            None => return,
        };
        let paint = PixmapPaint {
            opacity: color.a as f32 / 255.0,
            ..PixmapPaint::default()
        };
        let left = (x + self.left).round() as i32;
        let top = (y + self.top).round() as i32;
        target.draw_pixmap(left, top, glyphs.as_ref(), &paint, Transform::identity(), None);
    }
}

fn alpha_image(pixmap: &Pixmap) -> GrayImage {
    GrayImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        Luma([pixmap.pixel(x, y).map_or(0, |p| p.alpha())])
    })
}
