use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Rect, Viewport};
use crate::error::EffectError;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn collect_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn require(document: &web::Document, selector: &str) -> Result<web::Element, EffectError> {
    query(document, selector).ok_or_else(|| EffectError::missing(selector))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Append `<span class=..>text</span>` to `parent`.
pub fn append_span(
    document: &web::Document,
    parent: &web::Node,
    class: &str,
    text: &str,
) -> Result<web::Element, EffectError> {
    let span = document.create_element("span")?;
    span.set_class_name(class);
    span.set_text_content(Some(text));
    parent.append_child(&span)?;
    Ok(span)
}

pub fn append_text(document: &web::Document, parent: &web::Node, text: &str) {
    _ = parent.append_child(&document.create_text_node(text));
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn offset_height(el: &web::Element) -> f64 {
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0)
}

#[inline]
pub fn offset_width(el: &web::Element) -> f64 {
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| h.offset_width() as f64)
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height, w.device_pixel_ratio())
}

/// Element rectangle in document coordinates.
pub fn document_rect(el: &web::Element, scroll_y: f64) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        x: r.left(),
        y: r.top() + scroll_y,
        w: r.width(),
        h: r.height(),
    }
}

pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, handler: impl FnMut() + 'static) {
    add_listener(el, "click", handler);
}

pub fn add_window_listener(event: &str, handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

/// Size the canvas backing store to its wrapper's CSS box × devicePixelRatio.
/// Returns the CSS-pixel viewport the canvas now covers.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    wrapper: &web::Element,
) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = wrapper.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width(), rect.height(), dpr);
    let (w_px, h_px) = viewport.device_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    viewport
}

pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}
