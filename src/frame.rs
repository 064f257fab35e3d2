use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render::Background;
use crate::sections::{FrameInfo, Section};

/// Everything the `requestAnimationFrame` loop drives.
pub struct FrameContext {
    pub started: Instant,
    pub sections: Vec<Rc<RefCell<dyn Section>>>,
    pub background: Option<Rc<RefCell<Background>>>,
    pub resize_pending: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        let viewport = dom::viewport();

        // Geometry is rebuilt before anything is drawn at the new size.
        if self.resize_pending.replace(false) {
            if let Some(bg) = &self.background {
                bg.borrow_mut().resize();
            }
            for section in &self.sections {
                section.borrow_mut().resize(&viewport);
            }
        }

        let info = FrameInfo {
            now,
            scroll_y: dom::scroll_y(),
            viewport,
        };
        for section in &self.sections {
            section.borrow_mut().tick(&info);
        }

        if let Some(bg) = &self.background {
            bg.borrow_mut().render(now);
        }
    }
}

pub fn wire_resize(resize_pending: &Rc<Cell<bool>>) {
    let flag = resize_pending.clone();
    dom::add_window_listener("resize", move || flag.set(true));
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
