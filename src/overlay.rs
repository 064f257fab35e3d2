use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::LOADER_FADE_SEC;
use crate::dom;

const LOADER_ID: &str = "loading";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

/// Fade the loader out, then take it out of the layout.
pub fn hide(document: &web::Document) {
    let Some(el) = document.get_element_by_id(LOADER_ID) else {
        return;
    };
    dom::set_style(&el, "transition", &format!("opacity {LOADER_FADE_SEC}s"));
    dom::set_style(&el, "opacity", "0");
    let done = Closure::once_into_js(move || {
        _ = el.class_list().add_1("hidden");
        dom::set_style(&el, "display", "none");
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            done.unchecked_ref(),
            (LOADER_FADE_SEC * 1000.0) as i32,
        );
    }
}
