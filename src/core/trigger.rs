//! Scroll-position provider for a bound trigger region.
//!
//! A region is described by where its start/end lines sit on the element
//! and on the viewport (`"top 60%"`, `"bottom bottom"`, ...). Given the
//! element's document position and the current scroll offset we derive a
//! progress fraction and the enter/leave lifecycle events.

use std::str::FromStr;

use super::ease::{clamp, Ease};
use super::tween::TweenSlot;
use crate::constants::SCRUB_LAG_SEC;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    /// Fraction of the height, `0.0` = top.
    Fraction(f64),
}

impl Anchor {
    #[inline]
    pub fn resolve(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => height * 0.5,
            Self::Bottom => height,
            Self::Fraction(f) => height * f,
        }
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                let pct = s
                    .strip_suffix('%')
                    .ok_or_else(|| format!("unknown anchor `{s}`"))?;
                let v: f64 = pct
                    .parse()
                    .map_err(|_| format!("bad percentage `{s}`"))?;
                Ok(Self::Fraction(v / 100.0))
            }
        }
    }
}

/// `(element anchor, viewport anchor)`; the line is crossed when the two meet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts
            .next()
            .ok_or_else(|| "empty edge".to_string())?
            .parse::<Anchor>()?;
        let viewport = parts
            .next()
            .map(|t| t.parse::<Anchor>())
            .transpose()?
            .unwrap_or(Anchor::Top);
        if parts.next().is_some() {
            return Err(format!("too many tokens in `{s}`"));
        }
        Ok(Self { element, viewport })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: Edge,
    pub end: Edge,
}

impl TriggerSpec {
    /// Build from a pair of edge strings. An invalid edge falls back to the
    /// region's natural `"top bottom"` / `"bottom top"`.
    pub fn parse(start: &str, end: &str) -> Self {
        let fallback = Self::default();
        let start = start.parse().unwrap_or_else(|e| {
            log::warn!("[trigger] {e}; using default start");
            fallback.start
        });
        let end = end.parse().unwrap_or_else(|e| {
            log::warn!("[trigger] {e}; using default end");
            fallback.end
        });
        Self { start, end }
    }
}

impl Default for TriggerSpec {
    /// Whole time the element overlaps the viewport.
    fn default() -> Self {
        Self {
            start: Edge {
                element: Anchor::Top,
                viewport: Anchor::Bottom,
            },
            end: Edge {
                element: Anchor::Bottom,
                viewport: Anchor::Top,
            },
        }
    }
}

/// Absolute scroll offsets where the region starts and ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

impl TriggerRange {
    pub fn resolve(
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
        spec: &TriggerSpec,
    ) -> Self {
        let edge = |e: &Edge| {
            element_top + e.element.resolve(element_height) - e.viewport.resolve(viewport_height)
        };
        Self {
            start: edge(&spec.start),
            end: edge(&spec.end),
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        clamp((scroll_y - self.start) / span, 0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Zone {
    #[default]
    Before,
    Inside,
    After,
}

/// Tracks which side of the region the scroll position is on.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriggerState {
    zone: Zone,
}

impl TriggerState {
    pub fn is_active(&self) -> bool {
        self.zone == Zone::Inside
    }

    /// Returns the lifecycle events crossed since the previous call, in the
    /// order they happened (a fast jump across the region yields two).
    pub fn update(&mut self, range: &TriggerRange, scroll_y: f64) -> Vec<TriggerEvent> {
        let zone = if scroll_y < range.start {
            Zone::Before
        } else if scroll_y > range.end {
            Zone::After
        } else {
            Zone::Inside
        };
        let events = match (self.zone, zone) {
            (Zone::Before, Zone::Inside) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Inside, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::After, Zone::Inside) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            (Zone::Inside, Zone::Before) => vec![TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = zone;
        events
    }
}

/// Smoothed progress that trails the raw value by a fixed lag.
#[derive(Clone, Debug)]
pub struct Scrub {
    slot: Option<TweenSlot>,
    raw: f64,
}

impl Scrub {
    /// `None` follows the raw progress exactly.
    pub fn new(lag_sec: Option<f64>) -> Self {
        Self {
            slot: lag_sec.map(|lag| TweenSlot::new(0.0, lag, Ease::Power3Out)),
            raw: 0.0,
        }
    }

    pub fn lagged() -> Self {
        Self::new(Some(SCRUB_LAG_SEC))
    }

    pub fn push(&mut self, now: f64, raw: f64) {
        self.raw = raw;
        if let Some(slot) = &mut self.slot {
            slot.retarget(now, raw);
        }
    }

    pub fn value(&mut self, now: f64) -> f64 {
        match &mut self.slot {
            Some(slot) => slot.step(now),
            None => self.raw,
        }
    }
}
