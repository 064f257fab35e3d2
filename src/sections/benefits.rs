use web_sys as web;

use super::{FrameInfo, ScrollRegion, Section};
use crate::constants::{DESKTOP_BREAKPOINT, FALLBACK_BAR_HEIGHT_PX, FALLBACK_DIGIT_HEIGHT_PX};
use crate::core::counter::{digit_offset, odometer_digits, overlay_fade};
use crate::core::tween::TweenSlot;
use crate::core::scroll::map_mobile_index;
use crate::core::{
    BreakpointWatcher, CounterConfig, CounterInterpolator, ScrollMapper, Scrub, SectionCommand,
    SectionState, TriggerSpec, Viewport, VisibilityPolicy,
};
use crate::dom;
use crate::error::EffectError;
use crate::media;

const ROOT: &str = ".fullscreen-features__wrapper";

fn policy_for(wide: bool) -> VisibilityPolicy {
    if wide {
        VisibilityPolicy::OnlyCurrent
    } else {
        VisibilityPolicy::UpToCurrent
    }
}

fn trigger_for(wide: bool) -> (TriggerSpec, Scrub) {
    if wide {
        (TriggerSpec::parse("top top", "bottom bottom"), Scrub::lagged())
    } else {
        (TriggerSpec::parse("top 50%", "bottom 50%"), Scrub::new(None))
    }
}

struct Layout {
    root: web::Element,
    bottom: Option<web::Element>,
    notch: Option<web::Element>,
    image: Option<web::Element>,
    overlay: Option<web::Element>,
    overlay_opacity: TweenSlot,
    text: Vec<web::Element>,
    strong: Vec<web::Element>,
    videos: Vec<web::HtmlMediaElement>,
}

impl Layout {
    fn collect(root: web::Element) -> Self {
        let bottom = dom::query_in(&root, ".bottom-layout");
        let text = [".pre-title", ".title", ".content__paragraph"]
            .iter()
            .filter_map(|sel| dom::query_in(&root, sel))
            .collect();
        Self {
            bottom,
            notch: dom::query_in(&root, ".notch__wrapper"),
            image: dom::query_in(&root, ".image-layout"),
            overlay: dom::query_in(&root, ".overlay"),
            overlay_opacity: overlay_fade(),
            text,
            strong: dom::query_all_in(&root, "strong"),
            videos: media::videos_in(&root),
            root,
        }
    }

    fn show(&self) {
        dom::set_style(&self.root, "pointer-events", "auto");
        dom::toggle_class(&self.root, "pointer", true);
        if let Some(notch) = &self.notch {
            dom::toggle_class(notch, "show", true);
        }
        let Some(bottom) = &self.bottom else {
            return;
        };
        dom::toggle_class(bottom, "show", true);
        for (i, el) in self.text.iter().enumerate() {
            let delay = 0.15 + i as f64 * 0.08;
            dom::set_style(
                el,
                "transition",
                &format!("opacity 0.7s ease-out {delay:.2}s, transform 0.7s ease-out {delay:.2}s"),
            );
            dom::set_style(el, "opacity", "1");
            dom::set_style(el, "transform", "translateY(0px)");
        }
        for (i, el) in self.strong.iter().enumerate() {
            let delay = 0.15 + i as f64 * 0.15 + 0.25;
            dom::set_style(el, "transition-delay", &format!("{delay:.2}s"));
            dom::toggle_class(el, "show", true);
        }
    }

    fn hide(&self) {
        dom::set_style(&self.root, "pointer-events", "none");
        dom::toggle_class(&self.root, "pointer", false);
        let Some(bottom) = &self.bottom else {
            return;
        };
        dom::toggle_class(bottom, "show", false);
        for el in &self.text {
            dom::set_style(el, "transition", "opacity 0.25s ease-in, transform 0.25s ease-in");
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "transform", "translateY(-20px)");
        }
        for el in &self.strong {
            dom::set_style(el, "transition-delay", "0s");
            dom::toggle_class(el, "show", false);
        }
    }

    fn set_notch_progress(&mut self, now: f64, progress: f64) {
        if let Some(image) = &self.image {
            dom::set_style(image, "--notch-progress", &format!("{progress:.4}"));
        }
        if self.overlay.is_some() {
            self.overlay_opacity.retarget(now, 1.0 - progress);
        }
    }

    /// Writes the current overlay opacity; true while the fade is running.
    fn render_overlay(&mut self, now: f64) -> bool {
        let Some(overlay) = &self.overlay else {
            return false;
        };
        let animating = self.overlay_opacity.is_animating(now);
        let opacity = self.overlay_opacity.step(now);
        dom::set_style(overlay, "opacity", &format!("{opacity:.4}"));
        animating
    }
}

/// Pinned full-screen benefit layouts with an odometer counter and a
/// progress bar.
pub struct Benefits {
    region: ScrollRegion,
    layouts: Vec<Layout>,
    mapper: ScrollMapper,
    section: SectionState,
    counter: CounterInterpolator,
    bar: Option<web::Element>,
    bar_track: Option<web::Element>,
    badge: Option<web::Element>,
    digit_columns: Vec<(web::Element, Option<web::Element>)>,
    watcher: BreakpointWatcher,
    last_progress: Option<f64>,
    counter_dirty: bool,
    overlays_dirty: bool,
}

impl Benefits {
    pub fn install(document: &web::Document, viewport: &Viewport) -> Result<Self, EffectError> {
        let wrapper = dom::require(document, ROOT)?;
        let layouts: Vec<Layout> = dom::query_all_in(&wrapper, ".sticky-layout")
            .into_iter()
            .map(Layout::collect)
            .collect();
        if layouts.is_empty() {
            return Err(EffectError::EmptySection("benefits"));
        }
        let n = layouts.len();
        let watcher = BreakpointWatcher::new(DESKTOP_BREAKPOINT, viewport.width);
        let wide = watcher.is_wide();
        let (spec, scrub) = trigger_for(wide);
        let digit_columns = dom::query_all_in(&wrapper, ".digit-column")
            .into_iter()
            .map(|col| {
                let stack = dom::query_in(&col, ".digit-stack");
                (col, stack)
            })
            .collect();

        for layout in layouts.iter().skip(1) {
            layout.hide();
        }

        let mut benefits = Self {
            bar: dom::query_in(&wrapper, ".progress-bar .progress"),
            bar_track: dom::query_in(&wrapper, ".progress-bar"),
            badge: dom::query_in(&wrapper, ".counter"),
            region: ScrollRegion::new(wrapper, spec, scrub),
            layouts,
            mapper: ScrollMapper::new(n),
            section: SectionState::new(n, policy_for(wide)),
            counter: CounterInterpolator::new(n, CounterConfig::default()),
            digit_columns,
            watcher,
            last_progress: None,
            counter_dirty: true,
            overlays_dirty: false,
        };
        benefits.enter_layout(wide);
        log::info!("[benefits] {} layouts, desktop={}", n, wide);
        Ok(benefits)
    }

    fn apply(&self, commands: &[SectionCommand]) {
        for cmd in commands {
            match *cmd {
                SectionCommand::Show(i) => self.layouts[i].show(),
                SectionCommand::Hide(i) => self.layouts[i].hide(),
                SectionCommand::PlayMedia(i) => {
                    self.layouts[i].videos.iter().for_each(media::play_if_paused)
                }
                SectionCommand::PauseMedia(i) => {
                    self.layouts[i].videos.iter().for_each(media::pause)
                }
            }
        }
    }

    /// Reset to the initial state of the desktop or mobile layout.
    fn enter_layout(&mut self, wide: bool) {
        let paused = self.section.rebuild(policy_for(wide));
        self.apply(&paused);
        self.mapper.reset(self.layouts.len());
        self.counter.reset();
        let (spec, scrub) = trigger_for(wide);
        self.region.retarget(spec, scrub);
        self.last_progress = None;
        self.counter_dirty = true;
        if wide {
            self.mapper.set_index(0);
            let shown = self.section.set_index(0);
            self.apply(&shown);
        }
    }

    fn tick_desktop(&mut self, now: f64, progress: f64) {
        let Some(update) = self.mapper.update(progress) else {
            return;
        };
        if let Some(change) = update.index_change {
            let commands = self.section.set_index(change.current);
            self.apply(&commands);
        }
        for (layout, np) in self.layouts.iter_mut().zip(&update.notch_progress) {
            layout.set_notch_progress(now, *np);
        }
        self.overlays_dirty = true;
        self.counter.set_progress(now, update.eased_progress);
        self.counter_dirty = true;
    }

    fn tick_mobile(&mut self, progress: f64) {
        let index = map_mobile_index(progress, self.layouts.len());
        if self.mapper.set_index(index).is_some() {
            let commands = self.section.set_index(index);
            self.apply(&commands);
        }
    }

    fn render_counter(&self, now: f64) {
        let fill = self.counter.bar_fill(now);
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "transform", &format!("scaleY({fill:.4})"));
        }
        if let Some(badge) = &self.badge {
            let track = self
                .bar_track
                .as_ref()
                .map(dom::offset_height)
                .filter(|h| *h > 0.0)
                .unwrap_or(FALLBACK_BAR_HEIGHT_PX);
            let y = self.counter.counter_offset(now, track);
            dom::set_style(badge, "transform", &format!("translateY({y:.2}px)"));
        }
        let digits = odometer_digits(self.counter.displayed_counter(now));
        for ((column, stack), digit) in self.digit_columns.iter().zip(digits) {
            let Some(stack) = stack else { continue };
            let h = Some(dom::offset_height(column))
                .filter(|h| *h > 0.0)
                .unwrap_or(FALLBACK_DIGIT_HEIGHT_PX);
            let y = digit_offset(digit, h);
            dom::set_style(stack, "transform", &format!("translateY({y:.2}px)"));
        }
    }
}

impl Section for Benefits {
    fn name(&self) -> &'static str {
        "benefits"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        let tick = self.region.poll(frame);
        if self.last_progress != Some(tick.progress) {
            self.last_progress = Some(tick.progress);
            if self.watcher.is_wide() {
                self.tick_desktop(frame.now, tick.progress);
            } else {
                self.tick_mobile(tick.progress);
            }
        }
        let animating = self.counter.is_animating(frame.now);
        if animating || self.counter_dirty {
            self.counter.step(frame.now);
            self.render_counter(frame.now);
            self.counter_dirty = animating;
        }
        if self.overlays_dirty {
            let mut running = false;
            for layout in &mut self.layouts {
                running |= layout.render_overlay(frame.now);
            }
            self.overlays_dirty = running;
        }
    }

    fn resize(&mut self, viewport: &Viewport) {
        if let Some(wide) = self.watcher.update(viewport.width) {
            log::info!("[benefits] layout switch, desktop={}", wide);
            self.enter_layout(wide);
        }
    }
}
