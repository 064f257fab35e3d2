use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use super::{FrameInfo, ScrollRegion, Section};
use crate::constants::{
    ACCENT_RGB, HERO_DESKTOP_FRAMES, HERO_FRAME_COUNT, HERO_FRAME_START, HERO_MOBILE_FRAMES,
    TITLE_RGB,
};
use crate::core::frames::{frame_urls, FrameSequence};
use crate::core::motion::indicator_offset;
use crate::core::text::{reveal_titles, split_chars};
use crate::core::{Rgb, Scrub, TriggerSpec, Viewport};
use crate::dom;
use crate::error::EffectError;
use crate::media;
use crate::overlay;

type FrameSlots = Rc<RefCell<Vec<Option<web::HtmlImageElement>>>>;

/// Scroll-scrubbed image sequence on `#canvas` with the stacked hero titles.
pub struct Hero {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    frames: FrameSlots,
    sequence: Rc<RefCell<FrameSequence>>,
    ready: Rc<Cell<bool>>,
    ready_at: Option<f64>,
    region: ScrollRegion,
    titles: Vec<Vec<web::Element>>,
    indicator: Option<web::Element>,
    last_progress: Option<f64>,
}

fn split_title(
    document: &web::Document,
    title: &web::Element,
) -> Result<Vec<web::Element>, EffectError> {
    let text = title.text_content().unwrap_or_default();
    title.set_inner_html("");
    split_chars(&text)
        .into_iter()
        .map(|c| dom::append_span(document, title, "char", &c.to_string()))
        .collect()
}

impl Hero {
    pub fn install(document: &web::Document, viewport: &Viewport) -> Result<Self, EffectError> {
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or_else(|| EffectError::missing("#canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| EffectError::missing("canvas#canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EffectError::NoContext("2d"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| EffectError::NoContext("2d"))?;
        let scroller = dom::require(document, ".video-sequence-scroll")?;

        let mut titles = Vec::new();
        for id in ["title1", "title2", "title3"] {
            if let Some(title) = document.get_element_by_id(id) {
                titles.push(split_title(document, &title)?);
            }
        }

        let template = if viewport.is_desktop() {
            HERO_DESKTOP_FRAMES
        } else {
            HERO_MOBILE_FRAMES
        };
        let origin = web::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let urls = frame_urls(&format!("{origin}{template}"), HERO_FRAME_COUNT, HERO_FRAME_START);

        let hero = Self {
            canvas,
            ctx,
            frames: Rc::new(RefCell::new(vec![None; urls.len()])),
            sequence: Rc::new(RefCell::new(FrameSequence::new(urls.len()))),
            ready: Rc::new(Cell::new(false)),
            ready_at: None,
            region: ScrollRegion::new(
                scroller,
                TriggerSpec::parse("top top", "bottom bottom"),
                Scrub::new(None),
            ),
            titles,
            indicator: document.get_element_by_id("indicatorInner"),
            last_progress: None,
        };
        hero.fit_canvas(viewport);
        dom::set_body_scroll_locked(true);
        overlay::show(document);
        hero.load(document.clone(), urls);
        Ok(hero)
    }

    /// Fetch every frame concurrently; unlock the page once all have settled.
    fn load(&self, document: web::Document, urls: Vec<String>) {
        let total = urls.len();
        log::info!("[hero] loading {} frames", total);
        let settled = Rc::new(Cell::new(0usize));
        for (i, url) in urls.into_iter().enumerate() {
            let frames = self.frames.clone();
            let sequence = self.sequence.clone();
            let ready = self.ready.clone();
            let settled = settled.clone();
            let document = document.clone();
            spawn_local(async move {
                match media::load_image(&url).await {
                    Ok(img) => {
                        frames.borrow_mut()[i] = Some(img);
                        sequence.borrow_mut().mark_loaded(i);
                    }
                    Err(e) => log::warn!("[hero] frame {} failed: {:?}", i, e),
                }
                settled.set(settled.get() + 1);
                if settled.get() == total {
                    log::info!(
                        "[hero] {}/{} frames ready",
                        sequence.borrow().loaded_count(),
                        total
                    );
                    overlay::hide(&document);
                    dom::set_body_scroll_locked(false);
                    ready.set(true);
                }
            });
        }
    }

    fn fit_canvas(&self, viewport: &Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    fn draw(&self, frame: usize) {
        let frames = self.frames.borrow();
        let Some(Some(img)) = frames.get(frame) else {
            return;
        };
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h);
    }

    fn paint_titles(&self, progress: f64) {
        let counts: Vec<usize> = self.titles.iter().map(Vec::len).collect();
        let accent = Rgb(ACCENT_RGB).css();
        let settled = Rgb(TITLE_RGB).css();
        for (chars, styles) in self.titles.iter().zip(reveal_titles(progress, &counts)) {
            for (ch, style) in chars.iter().zip(styles) {
                dom::set_style(ch, "opacity", &format!("{:.3}", style.opacity));
                dom::set_style(ch, "color", if style.accent { &accent } else { &settled });
            }
        }
    }
}

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        if self.ready_at.is_none() && self.ready.get() {
            self.ready_at = Some(frame.now);
            self.draw(self.sequence.borrow().current());
        }
        let progress = self.region.poll(frame).progress;
        if self.last_progress != Some(progress) {
            self.last_progress = Some(progress);
            let next = self.sequence.borrow_mut().update(progress);
            if let Some(f) = next {
                self.draw(f);
            }
            self.paint_titles(progress);
        }
        if let (Some(start), Some(indicator)) = (self.ready_at, &self.indicator) {
            let y = indicator_offset(frame.now - start);
            dom::set_style(indicator, "transform", &format!("translateY({y:.2}px)"));
        }
    }

    fn resize(&mut self, viewport: &Viewport) {
        self.fit_canvas(viewport);
        self.draw(self.sequence.borrow().current());
    }
}
