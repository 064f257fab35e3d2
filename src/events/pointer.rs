use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::motion::border_hover_transform;
use crate::core::Rect;
use crate::dom;

/// Glow that follows the pointer inside a bordered card.
struct BorderHover {
    wrapper: web::Element,
    border: web::Element,
    gradient: web::Element,
    rect: Rect,
}

impl BorderHover {
    fn collect(wrapper: web::Element, scroll_y: f64) -> Option<Self> {
        let border = dom::query_in(&wrapper, ".border-holder")?;
        let gradient = dom::query_in(&wrapper, ".background-gradient")?;
        Some(Self {
            rect: dom::document_rect(&wrapper, scroll_y),
            wrapper,
            border,
            gradient,
        })
    }

    fn refresh(&mut self, scroll_y: f64) {
        self.rect = dom::document_rect(&self.wrapper, scroll_y);
    }

    fn follow(&self, pointer: DVec2, scroll_y: f64) {
        let transform = border_hover_transform(pointer, &self.rect, scroll_y);
        dom::set_style(&self.border, "transform", &transform);
        dom::set_style(&self.gradient, "transform", &transform);
    }
}

/// Wire every `.border__wrapper` on the page. Returns how many were found.
pub fn wire_border_hover(document: &web::Document) -> usize {
    let scroll_y = dom::scroll_y();
    let hovers: Vec<BorderHover> = dom::query_all(document, ".border__wrapper")
        .into_iter()
        .filter_map(|w| BorderHover::collect(w, scroll_y))
        .collect();
    let count = hovers.len();
    if count == 0 {
        return 0;
    }
    let hovers = Rc::new(RefCell::new(hovers));

    for event in ["scroll", "resize"] {
        let hovers = hovers.clone();
        dom::add_window_listener(event, move || {
            let scroll_y = dom::scroll_y();
            for h in hovers.borrow_mut().iter_mut() {
                h.refresh(scroll_y);
            }
        });
    }

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pointer = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let scroll_y = dom::scroll_y();
        for h in hovers.borrow().iter() {
            h.follow(pointer, scroll_y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
    count
}
