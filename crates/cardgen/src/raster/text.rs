//! Laying out a line of text into a coverage mask

use image::GrayImage;

use super::compose::Mask;
use crate::fonts::GlyphSource;

/// A rasterized glyph positioned relative to the start of the baseline
#[derive(Debug, Clone)]
pub struct PlacedGlyph {
    /// Left edge, positive is right
    pub left: i32,
    /// Top edge, positive is down (so usually negative)
    pub top: i32,
    /// Bitmap width
    pub width: usize,
    /// Bitmap height
    pub height: usize,
    /// `width * height` coverage values
    pub coverage: Vec<u8>,
}

/// A single line of glyphs
#[derive(Debug, Clone, Default)]
pub struct TextRun {
    /// Glyphs with ink, in text order
    pub glyphs: Vec<PlacedGlyph>,
    /// Pen position after the last glyph
    pub advance: f32,
}

impl TextRun {
    /// Place every character of `text` on a baseline at `y = 0`
    ///
    /// `spacing` is added after every glyph, like CSS `letter-spacing`.
    pub fn layout(font: &dyn GlyphSource, text: &str, px: f32, spacing: f32) -> Self {
        let mut glyphs = Vec::new();
        let mut pen = 0.0f32;
        let mut prev = None;
        for c in text.chars() {
            if let Some(p) = prev {
                pen += font.kern(p, c, px);
            }
            let (m, coverage) = font.rasterize(c, px);
            if m.width > 0 && m.height > 0 && coverage.len() >= m.width * m.height {
                glyphs.push(PlacedGlyph {
                    left: pen.round() as i32 + m.xmin,
                    top: -(m.ymin + m.height as i32),
                    width: m.width,
                    height: m.height,
                    coverage,
                });
            }
            pen += m.advance + spacing;
            prev = Some(c);
        }
        Self {
            glyphs,
            advance: pen,
        }
    }

    /// `(left, top, right, bottom)` of all ink, or `None` if there is none
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        self.glyphs.iter().fold(None, |acc, g| {
            let (r, b) = (g.left + g.width as i32, g.top + g.height as i32);
            Some(match acc {
                None => (g.left, g.top, r, b),
                Some((l0, t0, r0, b0)) => (l0.min(g.left), t0.min(g.top), r0.max(r), b0.max(b)),
            })
        })
    }

    /// Paint all glyphs into a single mask
    pub fn to_mask(&self) -> Option<Mask> {
        let (left, top, right, bottom) = self.bounds()?;
        let width = (right - left) as u32;
        let height = (bottom - top) as u32;
        let mut coverage = GrayImage::new(width, height);
        for g in &self.glyphs {
            let gx = (g.left - left) as u32;
            let gy = (g.top - top) as u32;
            for (i, &value) in g.coverage.iter().take(g.width * g.height).enumerate() {
                let x = gx + (i % g.width) as u32;
                let y = gy + (i / g.width) as u32;
                let px = coverage.get_pixel_mut(x, y);
                px.0[0] = px.0[0].saturating_add(value);
            }
        }
        Some(Mask {
            coverage,
            left: left as f32,
            top: top as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TextRun;
    use crate::fonts::{GlyphMetrics, GlyphSource};

    /// Every glyph is a solid `w`x`h` block sitting on the baseline,
    /// except for space, which has no ink.
    struct Blocks {
        w: usize,
        h: usize,
    }

    impl GlyphSource for Blocks {
        fn rasterize(&self, c: char, _px: f32) -> (GlyphMetrics, Vec<u8>) {
            if c == ' ' {
                let m = GlyphMetrics {
                    advance: self.w as f32,
                    ..GlyphMetrics::default()
                };
                return (m, Vec::new());
            }
            let m = GlyphMetrics {
                xmin: 0,
                ymin: 0,
                width: self.w,
                height: self.h,
                advance: self.w as f32,
            };
            (m, vec![0xFF; self.w * self.h])
        }

        fn kern(&self, left: char, right: char, _px: f32) -> f32 {
            if left == 'A' && right == 'V' {
                -2.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_layout_spacing_and_kerning() {
        let font = Blocks { w: 4, h: 6 };
        let run = TextRun::layout(&font, "AB C", 10.0, 1.0);
        assert_eq!(run.glyphs.len(), 3);
        let lefts: Vec<i32> = run.glyphs.iter().map(|g| g.left).collect();
        assert_eq!(lefts, vec![0, 5, 15]);
        assert_eq!(run.advance, 20.0);
        assert_eq!(run.glyphs[0].top, -6);

        let run = TextRun::layout(&font, "AV", 10.0, 0.0);
        assert_eq!(run.glyphs[1].left, 2);
    }

    #[test]
    fn test_mask() {
        let font = Blocks { w: 4, h: 6 };
        let run = TextRun::layout(&font, "A A", 10.0, 0.0);
        assert_eq!(run.bounds(), Some((0, -6, 12, 0)));
        let mask = run.to_mask().unwrap();
        assert_eq!(mask.coverage.dimensions(), (12, 6));
        assert_eq!((mask.left, mask.top), (0.0, -6.0));
        assert_eq!(mask.coverage.get_pixel(1, 1).0[0], 0xFF);
        assert_eq!(mask.coverage.get_pixel(5, 1).0[0], 0);
        assert_eq!(mask.coverage.get_pixel(9, 5).0[0], 0xFF);

        assert!(TextRun::layout(&font, "   ", 10.0, 1.0).to_mask().is_none());
    }
}
