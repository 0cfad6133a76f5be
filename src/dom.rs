use circuit_core::{Variant, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `#circuitCanvas`, if the page has one and it really is a canvas.
pub fn find_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

pub fn find_glyph_container(document: &web::Document) -> Option<web::Element> {
    document
        .query_selector(GLYPH_CONTAINER_SELECTOR)
        .ok()
        .flatten()
}

/// Variant requested by the canvas markup. Missing or unknown values fall
/// back to the default.
pub fn read_variant(canvas: &web::HtmlCanvasElement) -> Variant {
    match canvas.get_attribute(VARIANT_ATTRIBUTE) {
        None => Variant::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{e}; using {}", Variant::default());
            Variant::default()
        }),
    }
}

/// Window size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    window
        .device_pixel_ratio()
        .clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

/// Size the canvas to the full window (CSS size plus a DPR-scaled backing
/// store). Returns the viewport in CSS pixels and the scale applied.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Option<(Viewport, f64)> {
    let window = web::window()?;
    let viewport = window_viewport(&window);
    let dpr = device_pixel_ratio(&window);
    canvas.set_width(((viewport.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((viewport.height as f64 * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &css_px(viewport.width));
    _ = style.set_property("height", &css_px(viewport.height));
    Some((viewport, dpr))
}

/// Run `handler` once the DOM is parsed (immediately if it already is).
pub fn on_dom_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if dom_is_parsed(&document.ready_state()) {
        handler();
        return;
    }
    let closure = Closure::once(handler);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
