use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::section::arrow_direction;

/// Call `navigate(-1 | 1)` for ArrowLeft / ArrowRight anywhere on the page.
pub fn wire_arrow_keys(mut navigate: impl FnMut(i32) + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if let Some(direction) = arrow_direction(&ev.key()) {
                navigate(direction);
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
