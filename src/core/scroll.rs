//! Scroll fraction -> discrete item index and eased item position.
//!
//! One parameterized mapper replaces the per-section copies: each scroll
//! region owns a [`ScrollMapper`] and reacts to the [`ScrollUpdate`] it
//! returns. Discrete side effects are keyed off `index_change` only;
//! continuous quantities are refreshed on every tick.

use smallvec::SmallVec;

use super::counter::{bar_fill, counter_target};
use super::ease::{clamp, hold_then_smoothstep};
use crate::constants::{MIN_BAR_FILL, MOBILE_LEAD_IN, PARALLAX_RANGE_PERCENT};

/// Index used before the first item is reached (mobile lead-in).
pub const BEFORE_START: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapping {
    pub index: usize,
    pub eased_progress: f64,
}

/// Map a scroll fraction onto `item_count` items.
///
/// Returns `None` when there are no items.
pub fn map_scroll_to_index(progress: f64, item_count: usize) -> Option<ScrollMapping> {
    if item_count == 0 {
        return None;
    }
    let p = clamp(progress, 0.0, 1.0);
    if p == 0.0 {
        return Some(ScrollMapping {
            index: 0,
            eased_progress: 0.0,
        });
    }
    let last = (item_count - 1) as f64;
    let raw_item_progress = p * item_count as f64 - 0.5;
    let eased = clamp(hold_then_smoothstep(raw_item_progress + 0.5), 0.0, last);
    let index = clamp(eased.round(), 0.0, last) as usize;
    Some(ScrollMapping {
        index,
        eased_progress: eased,
    })
}

/// Mobile layouts reveal items in equal slices after a short lead-in.
/// Returns [`BEFORE_START`] during the lead-in.
pub fn map_mobile_index(progress: f64, item_count: usize) -> i32 {
    if item_count == 0 || progress < MOBILE_LEAD_IN {
        return BEFORE_START;
    }
    let adjusted = (progress - MOBILE_LEAD_IN) / (1.0 - MOBILE_LEAD_IN);
    let idx = (adjusted * item_count as f64).floor() as i64;
    idx.clamp(0, item_count as i64 - 1) as i32
}

/// Index of the card snapped into view in a horizontal carousel.
pub fn carousel_index(scroll_left: f64, item_width: f64) -> i32 {
    if item_width <= 0.0 {
        return 0;
    }
    (scroll_left / item_width).round() as i32
}

/// Vertical parallax offset in percent: `-range` at the start of the region,
/// `+range` at the end.
pub fn parallax_percent(progress: f64) -> f64 {
    let p = clamp(progress, 0.0, 1.0);
    -PARALLAX_RANGE_PERCENT + 2.0 * PARALLAX_RANGE_PERCENT * p
}

/// Per-item overlay progress: item `i` opens as the eased position passes it.
pub fn notch_progress(eased_progress: f64, item: usize) -> f64 {
    clamp(eased_progress - item as f64, 0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: i32,
    pub current: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub index_change: Option<IndexChange>,
    pub eased_progress: f64,
    pub notch_progress: SmallVec<[f64; 8]>,
    pub bar_fill: f64,
    pub counter_target: f64,
}

/// Mutable per-region state, updated once per scroll callback.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub raw_progress: f64,
    pub item_count: usize,
    pub current_index: i32,
    pub previous_index: i32,
    pub eased_progress: f64,
}

#[derive(Clone, Debug)]
pub struct ScrollMapper {
    state: ScrollState,
    min_fill: f64,
}

impl ScrollMapper {
    pub fn new(item_count: usize) -> Self {
        Self::with_min_fill(item_count, MIN_BAR_FILL)
    }

    pub fn with_min_fill(item_count: usize, min_fill: f64) -> Self {
        Self {
            state: ScrollState {
                raw_progress: 0.0,
                item_count,
                current_index: BEFORE_START,
                previous_index: BEFORE_START,
                eased_progress: 0.0,
            },
            min_fill,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn current_index(&self) -> i32 {
        self.state.current_index
    }

    pub fn eased_progress(&self) -> f64 {
        self.state.eased_progress
    }

    /// Feed a new scroll fraction. Returns `None` (after a warning) when the
    /// region has no items.
    pub fn update(&mut self, progress: f64) -> Option<ScrollUpdate> {
        let n = self.state.item_count;
        let Some(mapping) = map_scroll_to_index(progress, n) else {
            log::warn!("[scroll] mapper has no items; ignoring progress {:.3}", progress);
            return None;
        };
        self.state.raw_progress = progress;
        self.state.eased_progress = mapping.eased_progress;
        let index_change = self.set_index(mapping.index as i32);
        let eased = mapping.eased_progress;
        Some(ScrollUpdate {
            index_change,
            eased_progress: eased,
            notch_progress: (0..n).map(|i| notch_progress(eased, i)).collect(),
            bar_fill: bar_fill(eased, n, self.min_fill),
            counter_target: counter_target(eased, n),
        })
    }

    /// Store `index` and report the transition, or `None` if unchanged.
    pub fn set_index(&mut self, index: i32) -> Option<IndexChange> {
        if index == self.state.current_index {
            return None;
        }
        self.state.previous_index = self.state.current_index;
        self.state.current_index = index;
        Some(IndexChange {
            previous: self.state.previous_index,
            current: index,
        })
    }

    /// Drop back to the pre-start sentinel (used when the layout is rebuilt).
    pub fn reset(&mut self, item_count: usize) {
        *self = Self::with_min_fill(item_count, self.min_fill);
    }
}

/// Two-state switch flipped when progress crosses a threshold, in either
/// direction. Only the crossing is reported.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdFlip {
    threshold: f64,
    past: bool,
}

impl ThresholdFlip {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Returns `Some(true)` on crossing upward, `Some(false)` on dropping
    /// back below, `None` otherwise.
    pub fn update(&mut self, progress: f64) -> Option<bool> {
        let past = progress >= self.threshold;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }
}
