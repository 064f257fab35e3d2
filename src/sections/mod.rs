//! Page sections driven from the frame loop.
//!
//! Every section reads its scroll position through a [`ScrollRegion`], feeds
//! the core mappers and writes the result back to the DOM.

use web_sys as web;

use crate::core::trigger::TriggerEvent;
use crate::core::{Scrub, TriggerRange, TriggerSpec, TriggerState, Viewport};
use crate::dom;

pub mod benefits;
pub mod decor;
pub mod features;
pub mod hero;
pub mod yard;

/// Per-frame inputs shared by all sections.
#[derive(Clone, Copy, Debug)]
pub struct FrameInfo {
    /// Seconds since start-up.
    pub now: f64,
    pub scroll_y: f64,
    pub viewport: Viewport,
}

pub trait Section {
    fn name(&self) -> &'static str;
    fn tick(&mut self, frame: &FrameInfo);
    /// Viewport size changed. Runs before the next `tick`.
    fn resize(&mut self, _viewport: &Viewport) {}
}

#[derive(Clone, Debug)]
pub struct RegionTick {
    /// Progress after scrubbing.
    pub progress: f64,
    pub events: Vec<TriggerEvent>,
}

/// Scroll trigger bound to one element.
pub struct ScrollRegion {
    element: web::Element,
    spec: TriggerSpec,
    state: TriggerState,
    scrub: Scrub,
    last_raw: Option<f64>,
}

impl ScrollRegion {
    pub fn new(element: web::Element, spec: TriggerSpec, scrub: Scrub) -> Self {
        Self {
            element,
            spec,
            state: TriggerState::default(),
            scrub,
            last_raw: None,
        }
    }

    /// Swap start/end edges (layout crossed a breakpoint).
    pub fn retarget(&mut self, spec: TriggerSpec, scrub: Scrub) {
        self.spec = spec;
        self.scrub = scrub;
        self.reset();
    }

    /// Forget which side of the region we were on.
    pub fn reset(&mut self) {
        self.state = TriggerState::default();
        self.last_raw = None;
    }

    /// Measure against the current layout. Element rects are read every
    /// frame so late-loading content above the section is picked up.
    pub fn range(&self, frame: &FrameInfo) -> TriggerRange {
        let rect = dom::document_rect(&self.element, frame.scroll_y);
        TriggerRange::resolve(rect.y, rect.h, frame.viewport.height, &self.spec)
    }

    pub fn poll(&mut self, frame: &FrameInfo) -> RegionTick {
        let range = self.range(frame);
        let raw = range.progress(frame.scroll_y);
        if self.last_raw != Some(raw) {
            self.scrub.push(frame.now, raw);
            self.last_raw = Some(raw);
        }
        RegionTick {
            progress: self.scrub.value(frame.now),
            events: self.state.update(&range, frame.scroll_y),
        }
    }
}
