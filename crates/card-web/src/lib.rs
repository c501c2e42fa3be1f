use log::Level;
use wasm_bindgen::prelude::*;
use web_sys::{window, Event};

mod dom;
mod page;
mod surface;

pub use page::Page;
pub use surface::CanvasSurface;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn error_val(e: &JsValue);
}

fn init_or_log() {
    if let Err(e) = Page::new().and_then(|page| page.init()) {
        log::error!("Failed to set up page");
        error_val(&e);
    }
}

// Called when the wasm module is instantiated
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    if let Err(e) = console_log::init_with_level(Level::Debug) {
        error(&format!("Failed to set up logger: {}", e));
    }

    let window = window().ok_or("expected window")?;
    let document = window.document().ok_or("expected document")?;
    if document.ready_state() == "complete" {
        init_or_log();
    } else {
        let onload = Closure::<dyn FnMut(Event)>::new(|_e: Event| init_or_log());
        window.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
    }
    Ok(())
}

/// Draw the card with the current title, as the "Render" button does
#[wasm_bindgen]
pub fn render() -> Result<(), JsValue> {
    Page::new()?.render()
}
