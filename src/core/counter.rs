//! Odometer counter and progress bar that follow the eased item progress.

use super::ease::{clamp, lerp, Ease};
use super::tween::TweenSlot;
use crate::constants::{
    COUNTER_TWEEN_SEC, MIN_BAR_FILL, OVERLAY_FADE_SEC, PROGRESS_BAR_TWEEN_SEC,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterConfig {
    pub min_fill: f64,
    pub counter_duration: f64,
    pub bar_duration: f64,
    pub ease: Ease,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            min_fill: MIN_BAR_FILL,
            counter_duration: COUNTER_TWEEN_SEC,
            bar_duration: PROGRESS_BAR_TWEEN_SEC,
            ease: Ease::Power2Out,
        }
    }
}

/// Counter value for an eased item position, in `1..=item_count`.
pub fn counter_target(eased_progress: f64, item_count: usize) -> f64 {
    if item_count == 0 {
        return 1.0;
    }
    clamp(eased_progress + 1.0, 1.0, item_count as f64).round()
}

/// Bar fill fraction in `[min_fill, 1]` for an item position.
pub fn bar_fill(item_progress: f64, item_count: usize, min_fill: f64) -> f64 {
    let span = item_count.saturating_sub(1) as f64;
    let normalized = if span > 0.0 {
        clamp(item_progress / span, 0.0, 1.0)
    } else {
        0.0
    };
    lerp(min_fill, 1.0, normalized)
}

/// Two zero-padded decimal digits, e.g. `3 -> [0, 3]`. Values above 99 keep
/// their last two digits.
pub fn odometer_digits(value: u32) -> [u8; 2] {
    let v = value % 100;
    [(v / 10) as u8, (v % 10) as u8]
}

/// Vertical offset of a digit stack so that `digit` sits in the window.
#[inline]
pub fn digit_offset(digit: u8, digit_height: f64) -> f64 {
    -(digit as f64) * digit_height
}

/// Opacity of a layout's image overlay: fully covered until its notch opens.
pub fn overlay_fade() -> TweenSlot {
    TweenSlot::new(1.0, OVERLAY_FADE_SEC, Ease::Power1Out)
}

/// Time-based interpolation of the displayed counter and bar fill.
#[derive(Clone, Debug)]
pub struct CounterInterpolator {
    item_count: usize,
    min_fill: f64,
    counter: TweenSlot,
    bar: TweenSlot,
}

impl CounterInterpolator {
    pub fn new(item_count: usize, config: CounterConfig) -> Self {
        Self {
            item_count,
            min_fill: config.min_fill,
            counter: TweenSlot::new(1.0, config.counter_duration, config.ease),
            bar: TweenSlot::new(config.min_fill, config.bar_duration, config.ease),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Point both properties at the state implied by `eased_progress`.
    pub fn set_progress(&mut self, now: f64, eased_progress: f64) {
        self.counter
            .retarget(now, counter_target(eased_progress, self.item_count));
        self.bar.retarget(
            now,
            bar_fill(eased_progress, self.item_count, self.min_fill),
        );
    }

    /// Snap to the first item without animating.
    pub fn reset(&mut self) {
        self.counter.set(1.0);
        self.bar.set(self.min_fill);
    }

    pub fn step(&mut self, now: f64) {
        self.counter.step(now);
        self.bar.step(now);
    }

    pub fn counter_value(&self, now: f64) -> f64 {
        self.counter.value(now)
    }

    pub fn displayed_counter(&self, now: f64) -> u32 {
        self.counter_value(now).round().max(1.0) as u32
    }

    pub fn bar_fill(&self, now: f64) -> f64 {
        self.bar.value(now)
    }

    /// The counter badge rides down the bar by the filled height.
    pub fn counter_offset(&self, now: f64, bar_height: f64) -> f64 {
        bar_height * self.bar_fill(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.counter.is_animating(now) || self.bar.is_animating(now)
    }
}
