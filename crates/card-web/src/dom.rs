use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlInputElement};

pub(crate) fn canvas_context(
    document: &Document,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Failed to get element with ID '{}'", id))?
        .dyn_into::<HtmlCanvasElement>()
        .or(Err("Failed to cast to HtmlCanvasElement"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("context")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

pub(crate) fn input_value(document: &Document, id: &str) -> Result<String, JsValue> {
    let input = document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Failed to get element with ID '{}'", id))?
        .dyn_into::<HtmlInputElement>()
        .or(Err("Failed to cast to HtmlInputElement"))?;
    Ok(input.value())
}
