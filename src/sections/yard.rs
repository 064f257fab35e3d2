use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use super::{FrameInfo, ScrollRegion, Section};
use crate::constants::{THEME_FLIP_THRESHOLD, YOS_BREAKPOINT, YOS_HEADING};
use crate::core::motion::{
    yos_letter_opacity, yos_mobile_letter_opacity, yos_morph, yos_timeline_time, FlipTransform,
};
use crate::core::{BreakpointWatcher, MaskMode, Scrub, Theme, ThresholdFlip, TriggerSpec, Viewport};
use crate::dom;
use crate::error::EffectError;
use crate::render::Background;

const NBSP: &str = "\u{a0}";

/// "Yard Operating System." heading whose initials fly into the YOS logo,
/// flipping the page and background theme at the end of the section.
pub struct Yard {
    container: web::Element,
    animated: Vec<web::Element>,
    targets: Vec<web::Element>,
    superscript: Option<web::Element>,
    words: Vec<Vec<web::Element>>,
    flips: Vec<FlipTransform>,
    region: ScrollRegion,
    theme_flip: ThresholdFlip,
    watcher: BreakpointWatcher,
    background: Option<Rc<RefCell<Background>>>,
    last_progress: Option<f64>,
}

fn build_heading(
    document: &web::Document,
    heading: &web::Element,
) -> Result<Vec<Vec<web::Element>>, EffectError> {
    heading.set_inner_html("");
    let words: Vec<&str> = YOS_HEADING.split(' ').collect();
    let mut out = Vec::with_capacity(words.len());
    for (w, word) in words.iter().enumerate() {
        let wrapper = dom::append_span(document, heading, "heading__word-wrapper", "")?;
        _ = wrapper.set_attribute("aria-hidden", "true");
        let mut letters = Vec::new();
        for c in word.chars() {
            letters.push(dom::append_span(document, &wrapper, "", &c.to_string())?);
        }
        if w + 1 != words.len() {
            letters.push(dom::append_span(document, &wrapper, "", NBSP)?);
        }
        out.push(letters);
    }
    Ok(out)
}

impl Yard {
    pub fn install(
        document: &web::Document,
        viewport: &Viewport,
        background: Option<Rc<RefCell<Background>>>,
    ) -> Result<Self, EffectError> {
        let container = document
            .get_element_by_id("yos-section")
            .ok_or_else(|| EffectError::missing("#yos-section"))?;
        let heading = document
            .get_element_by_id("main-heading")
            .ok_or_else(|| EffectError::missing("#main-heading"))?;
        let words = build_heading(document, &heading)?;
        let mut yard = Self {
            animated: dom::query_all(document, "#animated-yos .anchor-letter"),
            targets: dom::query_all(document, ".anchor-to .anchor-letter"),
            superscript: dom::query(document, "#animated-yos .superscript"),
            words,
            flips: Vec::new(),
            region: ScrollRegion::new(
                container.clone(),
                TriggerSpec::parse("top top", "90% bottom"),
                Scrub::new(None),
            ),
            container,
            theme_flip: ThresholdFlip::new(THEME_FLIP_THRESHOLD),
            watcher: BreakpointWatcher::new(YOS_BREAKPOINT, viewport.width),
            background,
            last_progress: None,
        };
        yard.measure();
        log::info!("[yos] {} animated letters", yard.animated.len());
        Ok(yard)
    }

    /// Offsets from each word's initial to its slot in the logo.
    fn measure(&mut self) {
        let wide = self.watcher.is_wide();
        self.flips = self
            .animated
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let original = self.words.get(i).and_then(|w| w.first());
                match (original, self.targets.get(i)) {
                    (Some(from), Some(to)) => {
                        // Measure before hiding; hidden letters report empty rects.
                        dom::toggle_class(from, "hide", false);
                        let flip = FlipTransform::between(
                            &dom::document_rect(from, 0.0),
                            &dom::document_rect(to, 0.0),
                        );
                        dom::toggle_class(from, "hide", wide);
                        flip
                    }
                    _ => FlipTransform::IDENTITY,
                }
            })
            .collect();
        for letter in &self.animated {
            dom::set_style(letter, "opacity", "1");
        }
        self.last_progress = None;
    }

    fn apply_theme(&self, white: bool) {
        let (on, off, theme, mode) = if white {
            ("white", "green", Theme::White, MaskMode::Wave)
        } else {
            ("green", "white", Theme::Green, MaskMode::Pulse)
        };
        dom::toggle_class(&self.container, off, false);
        dom::toggle_class(&self.container, on, true);
        if let Some(sup) = &self.superscript {
            dom::toggle_class(sup, "show", white);
        }
        if let Some(bg) = &self.background {
            let mut bg = bg.borrow_mut();
            bg.set_theme(theme);
            bg.set_mode(mode);
        }
        log::debug!("[yos] theme -> {}", theme.key());
    }
}

impl Section for Yard {
    fn name(&self) -> &'static str {
        "yos"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        let progress = self.region.poll(frame).progress;
        if self.last_progress == Some(progress) {
            return;
        }
        self.last_progress = Some(progress);
        if let Some(white) = self.theme_flip.update(progress) {
            self.apply_theme(white);
        }

        let wide = self.watcher.is_wide();
        let time = yos_timeline_time(progress, wide);
        for word in &self.words {
            for (i, letter) in word.iter().enumerate() {
                let opacity = yos_letter_opacity(time, i, word.len());
                dom::set_style(letter, "opacity", &format!("{opacity:.3}"));
            }
        }
        let morph = yos_morph(time);
        for (i, (letter, flip)) in self.animated.iter().zip(&self.flips).enumerate() {
            if wide {
                dom::set_style(letter, "transform", &flip.towards_identity(morph).css());
            } else {
                let opacity = yos_mobile_letter_opacity(time, i);
                dom::set_style(letter, "transform", &FlipTransform::IDENTITY.css());
                dom::set_style(letter, "opacity", &format!("{opacity:.3}"));
            }
        }
    }

    fn resize(&mut self, viewport: &Viewport) {
        if let Some(wide) = self.watcher.update(viewport.width) {
            log::info!("[yos] layout switch, desktop={}", wide);
        }
        self.measure();
    }
}
