//! SVG clip path: a rectangle with a rounded trapezoidal notch cut into its
//! bottom edge.

use glam::DVec2;

use crate::constants::{
    NOTCH_OFFSET_DESKTOP_PX, NOTCH_OFFSET_MOBILE_PX, NOTCH_OFFSET_PX, NOTCH_POSITION,
    NOTCH_RADIUS_PX, NOTCH_SCROLL_MIN, NOTCH_SCROLL_SPAN, NOTCH_SIZE, NOTCH_WIDTH,
};

/// `position`, `size` and `notch_width` are fractions of the width;
/// `offset` (depth) and `radius` are pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchConfig {
    pub position: f64,
    pub size: f64,
    pub offset: f64,
    pub radius: f64,
    pub notch_width: f64,
}

impl Default for NotchConfig {
    fn default() -> Self {
        Self {
            position: NOTCH_POSITION,
            size: NOTCH_SIZE,
            offset: NOTCH_OFFSET_PX,
            radius: NOTCH_RADIUS_PX,
            notch_width: NOTCH_WIDTH,
        }
    }
}

impl NotchConfig {
    pub fn for_viewport(is_desktop: bool) -> Self {
        Self {
            offset: if is_desktop {
                NOTCH_OFFSET_DESKTOP_PX
            } else {
                NOTCH_OFFSET_MOBILE_PX
            },
            ..Self::default()
        }
    }

    pub fn with_position(self, position: f64) -> Self {
        Self { position, ..self }
    }
}

/// Horizontal notch centre for a scroll fraction through the section.
pub fn notch_position_for_scroll(progress: f64) -> f64 {
    NOTCH_SCROLL_MIN + progress.clamp(0.0, 1.0) * NOTCH_SCROLL_SPAN
}

#[inline]
fn round2(n: f64) -> f64 {
    // `+ 0.0` turns a rounded -0 into 0 so it never prints as "-0".
    (n * 100.0).round() / 100.0 + 0.0
}

/// Rounded corner from the current point to `to`. SVG grows a radius that
/// is too small for the chord to half its length, so the curve stays inside
/// the half disc on the sweep side of the chord. Where that disc leaves the
/// rectangle (the notch pushed against an edge) the corner is drawn straight.
fn corner(from: DVec2, to: DVec2, r: f64, w: f64, h: f64) -> String {
    if arc_fits(from, to, w, h) {
        format!("A {r},{r} 0 0 1 {},{}", to.x, to.y)
    } else {
        format!("L {},{}", to.x, to.y)
    }
}

fn arc_fits(from: DVec2, to: DVec2, w: f64, h: f64) -> bool {
    const EPS: f64 = 1e-9;
    let chord = to - from;
    let half = chord.length() * 0.5;
    if half <= EPS {
        return true;
    }
    let mid = (from + to) * 0.5;
    // Sweep flag 1 bulges to the left of travel in y-down space.
    let bulge = DVec2::new(chord.y, -chord.x) / (2.0 * half);
    let reach = |axis: DVec2| {
        if axis.dot(bulge) > 0.0 {
            mid.dot(axis) + half
        } else {
            from.dot(axis).max(to.dot(axis))
        }
    };
    reach(DVec2::X) <= w + EPS
        && reach(DVec2::NEG_X) <= EPS
        && reach(DVec2::Y) <= h + EPS
        && reach(DVec2::NEG_Y) <= EPS
}

/// Build the `d` attribute for the notched rectangle.
pub fn generate_notch_path(width: f64, height: f64, config: &NotchConfig) -> String {
    let w = width.max(0.0);
    let h = height.max(0.0);
    let pt = |x: f64, y: f64| DVec2::new(round2(x.clamp(0.0, w)), round2(y.clamp(0.0, h)));

    let margin = (1.0 - config.notch_width) * w * 0.25;
    let start = w * (config.position - config.size * 0.5) - margin;
    let end = w * (config.position + config.size * 0.5) + margin;
    let floor = h - config.offset.max(0.0);
    let r = round2(config.radius.max(0.0));

    let bottom_left = pt(0.0, h);
    let rise_from = pt(start, h);
    let rise_to = pt(start + margin, floor);
    let fall_from = pt(end - margin, floor);
    let fall_to = pt(end, h);
    let bottom_right = pt(w, h);

    format!(
        "M 0,0 L {},{} L {},{} {} L {},{} {} L {},{} L {},0 Z",
        bottom_left.x,
        bottom_left.y,
        rise_from.x,
        rise_from.y,
        corner(rise_from, rise_to, r, w, h),
        fall_from.x,
        fall_from.y,
        corner(fall_from, fall_to, r, w, h),
        bottom_right.x,
        bottom_right.y,
        bottom_right.x,
    )
}
