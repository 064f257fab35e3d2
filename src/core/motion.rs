//! Small decorative motions: flickering crosses, logo fade-in, the pointer
//! following border glow and the FLIP morph of the YOS letters.

use glam::DVec2;
use rand::Rng;

use super::ease::{clamp, lerp, Ease};
use super::grid::Rect;
use crate::constants::{
    FLICKER_HALF_PERIOD_SEC, FLICKER_MAX_DELAY_SEC, INDICATOR_LEG_SEC, INDICATOR_REPEAT_DELAY_SEC,
    INDICATOR_TRAVEL_PX, LOGO_FADE_FROM, LOGO_FADE_SEC, LOGO_FADE_STAGGER_SEC,
};

/// Scroll timelines of the YOS heading, in timeline seconds.
const YOS_DESKTOP_TIMELINE_SEC: f64 = 3.0;
const YOS_MOBILE_TIMELINE_SEC: f64 = 2.0;
const YOS_FADE_SEC: f64 = 0.5;
const YOS_FADE_STAGGER_SEC: f64 = 0.05;
const YOS_MORPH_START_SEC: f64 = 1.0;
const YOS_MORPH_SEC: f64 = 2.0;
const YOS_MOBILE_LETTER_SEC: f64 = 0.4;
const YOS_MOBILE_LETTER_STAGGER_SEC: f64 = 0.1;

/// Random start delay so crosses on the page do not flicker in lockstep.
pub fn flicker_delay(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..FLICKER_MAX_DELAY_SEC)
}

/// Scale of a cross arm: holds at 1 until `delay`, then loops 1 → 0 → 1.
pub fn cross_flicker_scale(time: f64, delay: f64) -> f64 {
    let t = time - delay;
    if t <= 0.0 {
        return 1.0;
    }
    let period = 2.0 * FLICKER_HALF_PERIOD_SEC;
    let phase = t % period;
    if phase < FLICKER_HALF_PERIOD_SEC {
        1.0 - Ease::ExpoInOut.apply(phase / FLICKER_HALF_PERIOD_SEC)
    } else {
        Ease::ExpoInOut.apply((phase - FLICKER_HALF_PERIOD_SEC) / FLICKER_HALF_PERIOD_SEC)
    }
}

/// Opacity of logo `index`, `time` seconds after the grid scrolled into view.
pub fn logo_fade_opacity(time: f64, index: usize) -> f64 {
    let t = (time - index as f64 * LOGO_FADE_STAGGER_SEC) / LOGO_FADE_SEC;
    lerp(LOGO_FADE_FROM, 1.0, Ease::Power2Out.apply(t))
}

/// CSS transform that centres the glow on the pointer. `wrapper` is the
/// wrapper rect in document coordinates.
pub fn border_hover_transform(pointer: DVec2, wrapper: &Rect, scroll_y: f64) -> String {
    let round1 = |v: f64| (v * 10.0).round() / 10.0 + 0.0;
    let x = round1(pointer.x - wrapper.x);
    let y = round1(pointer.y + scroll_y - wrapper.y);
    format!("translate3d(calc({x}px - 50%), calc({y}px - 50%), 0)")
}

/// Offset and scale that place a letter drawn at `to` over `from`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipTransform {
    pub offset: DVec2,
    pub scale: f64,
}

impl FlipTransform {
    pub const IDENTITY: FlipTransform = FlipTransform {
        offset: DVec2::ZERO,
        scale: 1.0,
    };

    pub fn between(from: &Rect, to: &Rect) -> Self {
        let centre = |r: &Rect| DVec2::new(r.x + r.w * 0.5, r.y + r.h * 0.5);
        Self {
            offset: centre(from) - centre(to),
            scale: if to.h > 0.0 { from.h / to.h } else { 1.0 },
        }
    }

    /// Interpolate toward identity; `t = 1` means the letter sits at `to`.
    pub fn towards_identity(&self, t: f64) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self {
            offset: self.offset * (1.0 - t),
            scale: lerp(self.scale, 1.0, t),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// Position on the YOS timeline for a scroll fraction through the section.
/// The mobile timeline is shorter: letters fade in instead of morphing.
pub fn yos_timeline_time(progress: f64, is_desktop: bool) -> f64 {
    let length = if is_desktop {
        YOS_DESKTOP_TIMELINE_SEC
    } else {
        YOS_MOBILE_TIMELINE_SEC
    };
    clamp(progress, 0.0, 1.0) * length
}

/// Morph amount of the YOS letters (desktop).
pub fn yos_morph(time: f64) -> f64 {
    Ease::Power3In.apply((time - YOS_MORPH_START_SEC) / YOS_MORPH_SEC)
}

/// Opacity of letter `index` of a `len`-letter heading word while the
/// heading fades out. The stagger runs from the last letter backwards.
pub fn yos_letter_opacity(time: f64, index: usize, len: usize) -> f64 {
    let from_end = len.saturating_sub(index + 1) as f64;
    let start = from_end * YOS_FADE_STAGGER_SEC;
    1.0 - clamp((time - start) / YOS_FADE_SEC, 0.0, 1.0)
}

/// Opacity of the YOS letter `index` on the mobile timeline.
pub fn yos_mobile_letter_opacity(time: f64, index: usize) -> f64 {
    let start = YOS_MORPH_START_SEC + index as f64 * YOS_MOBILE_LETTER_STAGGER_SEC;
    clamp((time - start) / YOS_MOBILE_LETTER_SEC, 0.0, 1.0)
}

/// Downward offset of the hero scroll indicator: expo-out down, expo-out
/// back up, short rest, repeat.
pub fn indicator_offset(time: f64) -> f64 {
    if time <= 0.0 {
        return 0.0;
    }
    let cycle = 2.0 * INDICATOR_LEG_SEC + INDICATOR_REPEAT_DELAY_SEC;
    let phase = time % cycle;
    if phase < INDICATOR_LEG_SEC {
        INDICATOR_TRAVEL_PX * Ease::ExpoOut.apply(phase / INDICATOR_LEG_SEC)
    } else if phase < 2.0 * INDICATOR_LEG_SEC {
        let t = (phase - INDICATOR_LEG_SEC) / INDICATOR_LEG_SEC;
        INDICATOR_TRAVEL_PX * (1.0 - Ease::ExpoOut.apply(t))
    } else {
        0.0
    }
}
