use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use super::{FrameInfo, ScrollRegion, Section};
use crate::constants::{
    CAROUSEL_ITEM_WIDTH, DESKTOP_BREAKPOINT, FALLBACK_DIGIT_HEIGHT_PX, SETTLED_RGB,
    SWEEP_SETTLE_DELAY_SEC, SWEEP_SETTLE_SEC, SWEEP_STAGGER_SEC,
};
use crate::core::counter::{digit_offset, odometer_digits};
use crate::core::notch::notch_position_for_scroll;
use crate::core::scroll::carousel_index;
use crate::core::text::{mobile_char_delays, split_words, sweep_tint};
use crate::core::trigger::TriggerEvent;
use crate::core::tween::Playhead;
use crate::core::{
    generate_notch_path, BreakpointWatcher, NotchConfig, Rgb, Scrub, SectionCommand,
    SectionState, TriggerSpec, Viewport, VisibilityPolicy,
};
use crate::dom;
use crate::error::EffectError;
use crate::events;
use crate::media;

const ROOT: &str = ".features-steps";

fn sweep_duration(chars: usize) -> f64 {
    SWEEP_SETTLE_DELAY_SEC + SWEEP_SETTLE_SEC + chars.saturating_sub(1) as f64 * SWEEP_STAGGER_SEC
}

struct Step {
    root: web::Element,
    index_trigger: ScrollRegion,
    text_trigger: ScrollRegion,
    paragraph: Option<web::Element>,
    chars: Vec<web::Element>,
    sweep: Playhead,
    sweep_dirty: bool,
}

impl Step {
    fn new(root: web::Element) -> Self {
        Self {
            paragraph: dom::query_in(&root, "p"),
            index_trigger: ScrollRegion::new(
                root.clone(),
                TriggerSpec::parse("top 60%", "bottom 40%"),
                Scrub::new(None),
            ),
            text_trigger: ScrollRegion::new(
                root.clone(),
                TriggerSpec::parse("top 70%", "bottom 30%"),
                Scrub::new(None),
            ),
            root,
            chars: Vec::new(),
            sweep: Playhead::new(0.0),
            sweep_dirty: false,
        }
    }

    /// Re-split the paragraph: word-wrapped chars for the desktop colour
    /// sweep, or flat chars with CSS delays for mobile.
    fn split_text(&mut self, document: &web::Document, wide: bool) -> Result<(), EffectError> {
        let Some(paragraph) = &self.paragraph else {
            return Ok(());
        };
        let text = paragraph.text_content().unwrap_or_default();
        paragraph.set_inner_html("");
        let mut chars = Vec::new();
        if wide {
            for (w, word) in split_words(&text).iter().enumerate() {
                if w > 0 {
                    dom::append_text(document, paragraph, " ");
                }
                let wrapper = dom::append_span(document, paragraph, "word", "")?;
                for c in word {
                    let span = dom::append_span(document, &wrapper, "split-chars", &c.to_string())?;
                    chars.push(span);
                }
            }
        } else {
            for (c, delay) in text.chars().zip(mobile_char_delays(&text)) {
                match delay {
                    Some(d) => {
                        let span =
                            dom::append_span(document, paragraph, "split-chars", &c.to_string())?;
                        dom::set_style(&span, "--v-delay", &format!("{d:.3}s"));
                        chars.push(span);
                    }
                    None => dom::append_text(document, paragraph, " "),
                }
            }
        }
        self.sweep = Playhead::new(sweep_duration(chars.len()));
        self.sweep_dirty = false;
        self.chars = chars;
        Ok(())
    }

    fn paint_sweep(&mut self, now: f64) {
        let moving = self.sweep.is_moving(now);
        if !moving && !self.sweep_dirty {
            return;
        }
        let t = self.sweep.position(now);
        let base = Rgb(SETTLED_RGB);
        for (i, ch) in self.chars.iter().enumerate() {
            dom::set_style(ch, "color", &sweep_tint(t, i, base).css());
        }
        self.sweep_dirty = moving;
    }
}

/// Numbered feature steps with a notched SVG mask and prev/next controls.
pub struct Features {
    document: web::Document,
    inner: Option<web::Element>,
    list: Option<web::Element>,
    steps: Vec<Step>,
    images: Vec<web::Element>,
    mobile_counters: Vec<web::Element>,
    digit_stacks: Vec<web::Element>,
    videos: Vec<web::HtmlMediaElement>,
    prev: Option<web::HtmlButtonElement>,
    next: Option<web::HtmlButtonElement>,
    svg_mask: Option<web::Element>,
    svg: Option<web::Element>,
    clip_path: Option<web::Element>,
    notch_region: ScrollRegion,
    notch: NotchConfig,
    last_notch_progress: Option<f64>,
    section: SectionState,
    watcher: BreakpointWatcher,
    digit_height: f64,
}

fn button(container: &web::Element, selector: &str) -> Option<web::HtmlButtonElement> {
    dom::query_in(container, selector).and_then(|el| el.dyn_into().ok())
}

impl Features {
    pub fn install(
        document: &web::Document,
        viewport: &Viewport,
    ) -> Result<Rc<RefCell<Self>>, EffectError> {
        let container = dom::require(document, ROOT)?;
        let steps: Vec<Step> = dom::query_all_in(&container, ".scroll-item")
            .into_iter()
            .map(Step::new)
            .collect();
        if steps.is_empty() {
            return Err(EffectError::EmptySection("features"));
        }
        let n = steps.len();
        let watcher = BreakpointWatcher::new(DESKTOP_BREAKPOINT, viewport.width);
        let svg_mask = dom::query_in(&container, ".svg-mask");
        let svg = svg_mask.as_ref().and_then(|m| dom::query_in(m, "svg"));
        let clip_path = svg.as_ref().and_then(|s| dom::query_in(s, "clipPath path"));

        let mut features = Self {
            document: document.clone(),
            inner: dom::query_in(&container, ".inner"),
            list: dom::query_in(&container, ".scroll-items-list"),
            steps,
            images: dom::query_all_in(&container, ".image"),
            mobile_counters: dom::query_all_in(&container, ".counter__mobile"),
            digit_stacks: dom::query_all_in(&container, ".digit-stack"),
            videos: media::videos_in(&container),
            prev: button(&container, ".buttons .button:first-child"),
            next: button(&container, ".buttons .button:last-child"),
            svg_mask,
            svg,
            clip_path,
            notch_region: ScrollRegion::new(container, TriggerSpec::default(), Scrub::lagged()),
            notch: NotchConfig::for_viewport(viewport.is_desktop()),
            last_notch_progress: None,
            section: SectionState::new(n, VisibilityPolicy::OnlyCurrent),
            watcher,
            digit_height: 0.0,
        };
        features.split_all_text()?;
        features.measure_digit_height();
        features.set_index(0);
        features.update_mask();

        let features = Rc::new(RefCell::new(features));
        Self::wire(&features);
        log::info!("[features] {} steps", n);
        Ok(features)
    }

    fn wire(this: &Rc<RefCell<Self>>) {
        let me = this.borrow();
        if let Some(prev) = &me.prev {
            let f = this.clone();
            dom::add_click_listener(prev, move || f.borrow_mut().navigate(-1));
        }
        if let Some(next) = &me.next {
            let f = this.clone();
            dom::add_click_listener(next, move || f.borrow_mut().navigate(1));
        }
        if let Some(list) = &me.list {
            let f = this.clone();
            dom::add_listener(list, "scroll", move || f.borrow_mut().on_carousel_scroll());
        }
        let f = this.clone();
        events::keyboard::wire_arrow_keys(move |direction| f.borrow_mut().navigate(direction));
    }

    fn split_all_text(&mut self) -> Result<(), EffectError> {
        let wide = self.watcher.is_wide();
        for step in &mut self.steps {
            step.split_text(&self.document, wide)?;
        }
        Ok(())
    }

    fn measure_digit_height(&mut self) {
        self.digit_height = dom::query(&self.document, &format!("{ROOT} .digit"))
            .map(|d| dom::offset_height(&d))
            .filter(|h| *h > 0.0)
            .unwrap_or(FALLBACK_DIGIT_HEIGHT_PX);
    }

    fn set_index(&mut self, index: i32) {
        let commands = self.section.set_index(index.max(0));
        if !commands.is_empty() {
            self.update_display(&commands);
        }
    }

    pub fn navigate(&mut self, direction: i32) {
        let commands = self.section.navigate(direction);
        if commands.is_empty() {
            return;
        }
        self.update_display(&commands);
        if self.watcher.is_wide() {
            return;
        }
        if let Some(list) = &self.list {
            let index = self.section.current() as f64;
            let left = dom::offset_width(list) * index * CAROUSEL_ITEM_WIDTH;
            let opts = web::ScrollToOptions::new();
            opts.set_left(left);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            list.scroll_to_with_scroll_to_options(&opts);
        }
    }

    fn on_carousel_scroll(&mut self) {
        if self.watcher.is_wide() {
            return;
        }
        let Some(list) = &self.list else { return };
        let item_width = dom::offset_width(list) * CAROUSEL_ITEM_WIDTH;
        let index = carousel_index(list.scroll_left() as f64, item_width);
        self.set_index(index);
    }

    fn update_display(&self, commands: &[SectionCommand]) {
        for cmd in commands {
            match *cmd {
                SectionCommand::Show(i) => dom::toggle_class(&self.steps[i].root, "show", true),
                SectionCommand::Hide(i) => dom::toggle_class(&self.steps[i].root, "show", false),
                SectionCommand::PlayMedia(i) => {
                    if let Some(v) = self.videos.get(i) {
                        media::play_from_start(v);
                    }
                }
                SectionCommand::PauseMedia(i) => {
                    if let Some(v) = self.videos.get(i) {
                        media::pause(v);
                    }
                }
            }
        }
        let current = self.section.current();
        if let Some(inner) = &self.inner {
            dom::set_style(inner, "--current-item", &current.to_string());
        }
        for (i, img) in self.images.iter().enumerate() {
            let visible = VisibilityPolicy::UpToCurrent.is_visible(i, current);
            dom::toggle_class(img, "is-visible", visible);
        }
        for (i, counter) in self.mobile_counters.iter().enumerate() {
            dom::toggle_class(counter, "show", i as i32 == current);
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(self.section.prev_disabled());
        }
        if let Some(next) = &self.next {
            next.set_disabled(self.section.next_disabled());
        }
        let digits = odometer_digits((current + 1).max(1) as u32);
        for (stack, digit) in self.digit_stacks.iter().zip(digits) {
            let y = digit_offset(digit, self.digit_height);
            dom::set_style(stack, "transform", &format!("translateY({y:.2}px)"));
        }
    }

    fn update_mask(&self) {
        let (Some(mask), Some(svg)) = (&self.svg_mask, &self.svg) else {
            return;
        };
        let w = dom::offset_width(mask);
        let h = dom::offset_height(mask);
        _ = svg.set_attribute("width", &w.to_string());
        _ = svg.set_attribute("height", &h.to_string());
        _ = svg.set_attribute("viewBox", &format!("0 0 {w} {h}"));
        if let Some(path) = &self.clip_path {
            _ = path.set_attribute("d", &generate_notch_path(w, h, &self.notch));
        }
    }
}

impl Section for Features {
    fn name(&self) -> &'static str {
        "features"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        if !self.watcher.is_wide() {
            return;
        }
        let mut entered = None;
        for (i, step) in self.steps.iter_mut().enumerate() {
            let index_events = step.index_trigger.poll(frame).events;
            if index_events
                .iter()
                .any(|e| matches!(e, TriggerEvent::Enter | TriggerEvent::EnterBack))
            {
                entered = Some(i);
            }
            for event in step.text_trigger.poll(frame).events {
                match event {
                    TriggerEvent::Enter => step.sweep.play(frame.now),
                    TriggerEvent::LeaveBack => step.sweep.reverse(frame.now),
                    _ => {}
                }
            }
            step.paint_sweep(frame.now);
        }
        if let Some(i) = entered {
            self.set_index(i as i32);
        }

        let progress = self.notch_region.poll(frame).progress;
        if self.last_notch_progress != Some(progress) {
            self.last_notch_progress = Some(progress);
            self.notch = self
                .notch
                .with_position(notch_position_for_scroll(progress));
            self.update_mask();
        }
    }

    fn resize(&mut self, viewport: &Viewport) {
        if let Some(wide) = self.watcher.update(viewport.width) {
            log::info!("[features] layout switch, desktop={}", wide);
            if let Err(e) = self.split_all_text() {
                log::warn!("[features] text split failed: {}", e);
            }
            for step in &mut self.steps {
                step.index_trigger.reset();
                step.text_trigger.reset();
            }
            self.notch_region.reset();
            self.last_notch_progress = None;
            self.notch = NotchConfig::for_viewport(wide).with_position(self.notch.position);
        }
        self.measure_digit_height();
        self.update_mask();
    }
}
