use cardgen::{Color, Surface, TextLayer};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A [`Surface`] that forwards to a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        }
    }

    fn set_letter_spacing(&self, px: f32) -> Result<(), JsValue> {
        // Not exposed by web-sys yet
        let value = JsValue::from_str(&format!("{}px", px));
        Reflect::set(self.ctx.as_ref(), &JsValue::from_str("letterSpacing"), &value)?;
        Ok(())
    }

    fn styled_text(&self, layer: &TextLayer, x: f32, y: f32, text: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.scale(layer.scale.0 as f64, layer.scale.1 as f64)?;
        ctx.set_font(&layer.css_font());
        ctx.set_fill_style_str(&layer.fill.to_css());
        self.set_letter_spacing(layer.letter_spacing)?;
        match &layer.shadow {
            Some(shadow) => {
                ctx.set_shadow_offset_x(shadow.offset_x as f64);
                ctx.set_shadow_offset_y(shadow.offset_y as f64);
                ctx.set_shadow_blur(shadow.blur as f64);
                ctx.set_shadow_color(&shadow.color.to_css());
            }
            None => {
                ctx.set_shadow_offset_x(0.0);
                ctx.set_shadow_offset_y(0.0);
                ctx.set_shadow_blur(0.0);
                ctx.set_shadow_color(&Color::TRANSPARENT.to_css());
            }
        }
        ctx.fill_text(text, x as f64, y as f64)
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Error = JsValue;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn image_size(image: &HtmlImageElement) -> (u32, u32) {
        (image.natural_width(), image.natural_height())
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn draw_image(&mut self, image: &HtmlImageElement, size: (u32, u32)) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            0.0,
            0.0,
            size.0 as f64,
            size.1 as f64,
        )
    }

    fn fill_text(&mut self, layer: &TextLayer, x: f32, y: f32, text: &str) -> Result<(), JsValue> {
        self.ctx.save();
        let res = self.styled_text(layer, x, y, text);
        self.ctx.restore();
        res
    }
}
