use cardgen::{
    draw_background, draw_card, draw_debug_border, BackgroundFit, CardTemplate, CardText, Surface,
};
use log::{debug, error, info, warn};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Document, Event, FontFace, FontFaceSet, HtmlButtonElement, HtmlImageElement};

use crate::{
    dom::{canvas_context, input_value},
    surface::CanvasSurface,
};

const CANVAS_ID: &str = "mycanvas";
const TITLE_INPUT_ID: &str = "title-entry";
const BUTTON_ID: &str = "render-button";
const BACKGROUND_SRC: &str = "./ucard.png";
const FONT_SOURCES: [(&str, &str); 2] = [
    ("goudy", "url(./fonts/GoudyMediaevalRegular.ttf)"),
    ("mplantin", "url(./fonts/MPlantin.woff2)"),
];

/// The card page: a canvas, a title input and a render button
pub struct Page {
    document: Document,
}

impl Page {
    /// The page of the current window
    pub fn new() -> Result<Page, JsValue> {
        let document = window()
            .ok_or("expected window")?
            .document()
            .ok_or("expected document")?;
        Ok(Self { document })
    }

    fn surface(&self) -> Result<CanvasSurface, JsValue> {
        let (canvas, ctx) = canvas_context(&self.document, CANVAS_ID)?;
        Ok(CanvasSurface::new(&canvas, ctx))
    }

    /// Draw the debug frame, start loading fonts and add the render button
    pub fn init(&self) -> Result<(), JsValue> {
        let mut surface = self.surface()?;
        draw_debug_border(&mut surface)?;
        self.load_fonts();
        self.append_button()?;
        Ok(())
    }

    fn load_fonts(&self) {
        let fonts = self.document.fonts();
        for (family, source) in FONT_SOURCES {
            match FontFace::new_with_str(family, source) {
                Ok(face) => spawn_local(load_font(fonts.clone(), face, family)),
                Err(e) => warn!("Invalid font face '{}': {:?}", family, e),
            }
        }
    }

    /// Append the render button, unless it is already there
    pub fn append_button(&self) -> Result<bool, JsValue> {
        if self.document.get_element_by_id(BUTTON_ID).is_some() {
            return Ok(false);
        }
        let body = self.document.body().ok_or("document should have a body")?;
        let button = self
            .document
            .create_element("button")?
            .dyn_into::<HtmlButtonElement>()?;
        button.set_id(BUTTON_ID);
        button.set_inner_text("Render");

        let callback = Closure::<dyn FnMut(Event)>::new(|_e: Event| {
            let res = Page::new().and_then(|page| page.render());
            if let Err(e) = res {
                error!("Render failed: {:?}", e);
            }
        });
        button.set_onclick(Some(callback.as_ref().unchecked_ref()));
        callback.forget();

        body.append_child(&button)?;
        Ok(true)
    }

    /// Clear the canvas and draw the card once the background has loaded
    ///
    /// The title is read when the image arrives, not when this is called.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut surface = self.surface()?;
        surface.clear();

        let image = HtmlImageElement::new()?;
        let background = image.clone();
        let document = self.document.clone();
        let onload = Closure::once_into_js(move || {
            debug!("Drawing card");
            let text = match input_value(&document, TITLE_INPUT_ID) {
                Ok(title) => CardText {
                    title,
                    ..CardText::default()
                },
                Err(e) => {
                    error!("Failed to read the title: {:?}", e);
                    let res = draw_background(&mut surface, &background, BackgroundFit::Natural);
                    if let Err(e) = res {
                        error!("Failed to draw background: {:?}", e);
                    }
                    return;
                }
            };
            let template = CardTemplate::classic();
            let res = draw_card(
                &mut surface,
                &template,
                &text,
                &background,
                BackgroundFit::Natural,
            );
            match res {
                Ok(()) => debug!("Done."),
                Err(e) => error!("Failed to draw card: {:?}", e),
            }
        });
        let onerror = Closure::once_into_js(|| {
            error!("Failed to load background '{}'", BACKGROUND_SRC);
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
        image.set_src(BACKGROUND_SRC);
        Ok(())
    }
}

async fn load_font(fonts: FontFaceSet, face: FontFace, family: &'static str) {
    let promise = match face.load() {
        Ok(promise) => promise,
        Err(e) => {
            warn!("Failed to start loading font '{}': {:?}", family, e);
            return;
        }
    };
    match JsFuture::from(promise).await {
        Ok(_) => match fonts.add(&face) {
            Ok(_) => info!("Font '{}' ready", family),
            Err(e) => warn!("Failed to register font '{}': {:?}", family, e),
        },
        Err(e) => warn!("Failed to load font '{}': {:?}", family, e),
    }
}
