//! Decorative effects: quote parallax, flickering crosses and the logo grid.

use web_sys as web;

use super::{FrameInfo, ScrollRegion, Section};
use crate::constants::{LOGO_FADE_FROM, LOGO_FADE_SEC, LOGO_FADE_STAGGER_SEC};
use crate::core::motion::{cross_flicker_scale, flicker_delay, logo_fade_opacity};
use crate::core::scroll::parallax_percent;
use crate::core::trigger::TriggerEvent;
use crate::core::tween::Playhead;
use crate::core::{Scrub, TriggerSpec, Viewport};
use crate::dom;
use crate::error::EffectError;

// ===================== Parallax =====================

struct ParallaxLayer {
    region: ScrollRegion,
    image: web::Element,
    last_progress: Option<f64>,
}

/// Quote images drift from -15% to +15% while their section crosses the
/// viewport.
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
}

impl Parallax {
    pub fn install(document: &web::Document) -> Result<Self, EffectError> {
        let layers: Vec<ParallaxLayer> =
            dom::query_all(document, ".notch-section__wrapper .big-image-content")
                .into_iter()
                .filter_map(|content| {
                    let image = dom::query_in(&content, ".image-wrapper")?;
                    dom::set_style(
                        &image,
                        "transform",
                        &format!("translateY({}%)", parallax_percent(0.0)),
                    );
                    Some(ParallaxLayer {
                        region: ScrollRegion::new(
                            content,
                            TriggerSpec::default(),
                            Scrub::new(None),
                        ),
                        image,
                        last_progress: None,
                    })
                })
                .collect();
        if layers.is_empty() {
            return Err(EffectError::EmptySection("parallax"));
        }
        Ok(Self { layers })
    }
}

impl Section for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        for layer in &mut self.layers {
            let p = layer.region.poll(frame).progress;
            if layer.last_progress == Some(p) {
                continue;
            }
            layer.last_progress = Some(p);
            let y = parallax_percent(p);
            dom::set_style(&layer.image, "transform", &format!("translateY({y:.3}%)"));
        }
    }
}

// ===================== Cross flicker =====================

struct Cross {
    vertical: Option<web::Element>,
    horizontal: Option<web::Element>,
    delay: f64,
}

/// Plus-shaped markers whose arms collapse and regrow on a loop.
pub struct CrossFlickers {
    crosses: Vec<Cross>,
    clock: f64,
    last_now: Option<f64>,
    paused: bool,
}

impl CrossFlickers {
    pub fn install(document: &web::Document, viewport: &Viewport) -> Result<Self, EffectError> {
        let mut rng = rand::thread_rng();
        let crosses: Vec<Cross> = dom::query_all(document, ".cross-flicker__wrapper")
            .into_iter()
            .map(|el| Cross {
                vertical: dom::query_in(&el, ".vertical"),
                horizontal: dom::query_in(&el, ".horizontal"),
                delay: flicker_delay(&mut rng),
            })
            .collect();
        if crosses.is_empty() {
            return Err(EffectError::EmptySection("cross flicker"));
        }
        let mut flickers = Self {
            crosses,
            clock: 0.0,
            last_now: None,
            paused: false,
        };
        flickers.resize(viewport);
        Ok(flickers)
    }
}

impl Section for CrossFlickers {
    fn name(&self) -> &'static str {
        "cross-flicker"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        let dt = self.last_now.map(|t| frame.now - t).unwrap_or(0.0);
        self.last_now = Some(frame.now);
        if self.paused {
            return;
        }
        self.clock += dt;
        for cross in &self.crosses {
            let s = cross_flicker_scale(self.clock, cross.delay);
            if let Some(v) = &cross.vertical {
                dom::set_style(v, "transform", &format!("scaleY({s:.4})"));
            }
            if let Some(h) = &cross.horizontal {
                dom::set_style(h, "transform", &format!("scaleX({s:.4})"));
            }
        }
    }

    /// Narrow layouts hide the horizontal arm; stop animating then.
    fn resize(&mut self, viewport: &Viewport) {
        let hidden = self
            .crosses
            .first()
            .and_then(|c| c.horizontal.as_ref())
            .map(|h| h.client_width() == 0)
            .unwrap_or(false);
        self.paused = !viewport.is_desktop() && hidden;
    }
}

// ===================== Logo grid =====================

/// Logos fade from 0.3 to full opacity in sequence once the grid is a fifth
/// of the way into view; scrolling back above reverses it.
pub struct LogoGrid {
    region: ScrollRegion,
    logos: Vec<web::Element>,
    timeline: Playhead,
    dirty: bool,
}

impl LogoGrid {
    pub fn install(document: &web::Document) -> Result<Self, EffectError> {
        let wrapper = dom::require(document, ".logo-grid-wrapper")?;
        let logos = dom::query_all_in(&wrapper, ".image");
        if logos.is_empty() {
            return Err(EffectError::EmptySection("logo grid"));
        }
        for logo in &logos {
            dom::set_style(logo, "opacity", &LOGO_FADE_FROM.to_string());
        }
        let duration = LOGO_FADE_SEC + (logos.len() - 1) as f64 * LOGO_FADE_STAGGER_SEC;
        Ok(Self {
            region: ScrollRegion::new(
                wrapper,
                TriggerSpec::parse("20% 50%", "bottom top"),
                Scrub::new(None),
            ),
            logos,
            timeline: Playhead::new(duration),
            dirty: false,
        })
    }
}

impl Section for LogoGrid {
    fn name(&self) -> &'static str {
        "logo-grid"
    }

    fn tick(&mut self, frame: &FrameInfo) {
        for event in self.region.poll(frame).events {
            match event {
                TriggerEvent::Enter => self.timeline.play(frame.now),
                TriggerEvent::LeaveBack => self.timeline.reverse(frame.now),
                _ => {}
            }
        }
        let moving = self.timeline.is_moving(frame.now);
        if !moving && !self.dirty {
            return;
        }
        let t = self.timeline.position(frame.now);
        for (i, logo) in self.logos.iter().enumerate() {
            dom::set_style(logo, "opacity", &format!("{:.3}", logo_fade_opacity(t, i)));
        }
        self.dirty = moving;
    }
}
