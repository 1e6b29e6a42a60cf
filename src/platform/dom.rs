//! DOM setup: canvas sizing and the ball-count element

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Window};

use crate::sim::Bounds;

/// Size the canvas to the window once and return the captured bounds
pub fn size_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<Bounds, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0).floor();
    let height = window.inner_height()?.as_f64().unwrap_or(0.0).floor();
    if width < 1.0 || height < 1.0 {
        return Err(JsValue::from_str("window has no drawable area"));
    }
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok(Bounds::new(width as f32, height as f32))
}

/// Find the page's canvas, or `None` if there is none
pub fn find_canvas(document: &Document) -> Result<Option<HtmlCanvasElement>, JsValue> {
    match document.query_selector("canvas")? {
        Some(el) => Ok(Some(el.dyn_into::<HtmlCanvasElement>()?)),
        None => Ok(None),
    }
}

/// Create the top-right text element showing the ball count
pub fn create_count_readout(document: &Document) -> Result<Element, JsValue> {
    let el: HtmlElement = document.create_element("p")?.dyn_into()?;
    let style = el.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "35px")?;
    style.set_property("right", "5px")?;
    style.set_property("color", "#aaa")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&el)?;
    Ok(el.into())
}
