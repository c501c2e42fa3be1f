//! # Drawing surfaces
//!
//! The drawing sequence of a card is the same no matter where the pixels end
//! up, so it is written once against the [`Surface`] trait.

use log::{debug, trace};

use crate::{
    card::CardText,
    geometry::BackgroundFit,
    template::{CardTemplate, Color, TextLayer},
};

/// Something a card can be drawn onto
pub trait Surface {
    /// A decoded image that can be drawn
    type Image;
    /// The error returned by fallible drawing operations
    type Error;

    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;

    /// The natural size of an image in pixels
    fn image_size(image: &Self::Image) -> (u32, u32);

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Stroke the outline of a rectangle with a 1px line
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color)
        -> Result<(), Self::Error>;

    /// Draw `image` with its top left corner at the origin, scaled to `size`
    fn draw_image(&mut self, image: &Self::Image, size: (u32, u32)) -> Result<(), Self::Error>;

    /// Draw a single line of text with its baseline starting at `(x, y)`
    ///
    /// The position is in layer coordinates, see [`TextLayer::to_device`].
    fn fill_text(&mut self, layer: &TextLayer, x: f32, y: f32, text: &str)
        -> Result<(), Self::Error>;
}

/// Draw a red frame around the whole surface
pub fn draw_debug_border<S: Surface>(surface: &mut S) -> Result<(), S::Error> {
    debug!("Drawing box...");
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    surface.stroke_rect(0.0, 0.0, w, h, Color::RED)?;
    debug!("Done.");
    Ok(())
}

/// Draw the background image at the origin, sized according to `fit`
pub fn draw_background<S: Surface>(
    surface: &mut S,
    background: &S::Image,
    fit: BackgroundFit,
) -> Result<(), S::Error> {
    let natural = S::image_size(background);
    let size = fit.draw_size(natural, (surface.width(), surface.height()));
    debug!(
        "Drawing background ({}x{} as {}x{})",
        natural.0, natural.1, size.0, size.1
    );
    surface.draw_image(background, size)
}

/// Draw the background and all text layers, without clearing first
pub fn draw_card<S: Surface>(
    surface: &mut S,
    template: &CardTemplate,
    text: &CardText,
    background: &S::Image,
    fit: BackgroundFit,
) -> Result<(), S::Error> {
    draw_background(surface, background, fit)?;

    draw_lines(surface, &template.title, std::slice::from_ref(&text.title))?;
    draw_lines(surface, &template.type_line, std::slice::from_ref(&text.type_line))?;
    draw_lines(surface, &template.rules, &text.rules)?;
    Ok(())
}

/// Clear the surface, then draw the card
///
/// Calling this again simply replaces the previous card.
pub fn render_card<S: Surface>(
    surface: &mut S,
    template: &CardTemplate,
    text: &CardText,
    background: &S::Image,
    fit: BackgroundFit,
) -> Result<(), S::Error> {
    surface.clear();
    draw_card(surface, template, text, background, fit)
}

fn draw_lines<S: Surface>(
    surface: &mut S,
    layer: &TextLayer,
    lines: &[String],
) -> Result<(), S::Error> {
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (x, y) = layer.line_position(index);
        trace!("{:?} at ({}, {}) in {}", line, x, y, layer.family);
        surface.fill_text(layer, x, y, line)?;
    }
    Ok(())
}
