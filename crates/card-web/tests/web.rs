use card_web::Page;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Document, HtmlCanvasElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().unwrap().document().unwrap()
}

/// The markup of the card page: a canvas and the title input
fn card_page(document: &Document) -> HtmlCanvasElement {
    let body = document.body().unwrap();
    if document.get_element_by_id("title-entry").is_none() {
        let input = document
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        input.set_id("title-entry");
        input.set_value("Wall of Wood");
        body.append_child(&input).unwrap();
    }
    match document.get_element_by_id("mycanvas") {
        Some(canvas) => canvas.dyn_into::<HtmlCanvasElement>().unwrap(),
        None => {
            let canvas = document
                .create_element("canvas")
                .unwrap()
                .dyn_into::<HtmlCanvasElement>()
                .unwrap();
            canvas.set_id("mycanvas");
            canvas.set_width(750);
            canvas.set_height(1050);
            body.append_child(&canvas).unwrap();
            canvas
        }
    }
}

fn button_count(document: &Document) -> u32 {
    document.query_selector_all("button").unwrap().length()
}

#[wasm_bindgen_test]
fn init_adds_one_button() {
    let document = document();
    card_page(&document);
    let page = Page::new().unwrap();
    page.init().unwrap();
    page.init().unwrap();
    assert_eq!(button_count(&document), 1);

    let button = document.get_element_by_id("render-button").unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Render"));
    assert!(!page.append_button().unwrap());
    assert_eq!(button_count(&document), 1);
}

#[wasm_bindgen_test]
fn render_keeps_canvas_size() {
    let document = document();
    let canvas = card_page(&document);
    let page = Page::new().unwrap();
    page.render().unwrap();
    page.render().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (750, 1050));
}

#[wasm_bindgen_test]
fn render_without_canvas_fails() {
    let document = document();
    card_page(&document);
    let canvas = document.get_element_by_id("mycanvas").unwrap();
    canvas.set_id("not-the-canvas");
    let res = Page::new().unwrap().render();
    canvas.set_id("mycanvas");
    assert!(res.is_err());
}
