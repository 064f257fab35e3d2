//! Numeric easing helpers shared by the scroll mappers and tweens.
//!
//! Everything here is a pure `f64 -> f64` function so it can be checked on
//! the host without a browser.

#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Cubic Hermite `3t² − 2t³` over `t` clamped to [0, 1].
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// "Snap and settle" easing used for item progress.
///
/// Within each unit segment the value holds at the segment floor for the
/// first half, then smoothsteps into the next integer over the second half.
pub fn hold_then_smoothstep(x: f64) -> f64 {
    let floored = x.floor();
    let decimal = x - floored;
    if decimal < 0.5 {
        return floored;
    }
    floored + smoothstep((decimal - 0.5) / 0.5)
}

/// Time-based tween curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2In,
    #[default]
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    ExpoOut,
    ExpoInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp(t, 0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power2In => t * t * t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3In => t.powi(4),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Self::ExpoInOut => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}
