use crate::constants::DESKTOP_BREAKPOINT;

/// Current layout viewport in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.width >= DESKTOP_BREAKPOINT
    }

    /// Backing-store size in device pixels, never zero.
    pub fn device_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).round() as u32;
        let h = (self.height * self.dpr).round() as u32;
        (w.max(1), h.max(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Reports when the viewport width crosses a layout breakpoint.
#[derive(Clone, Copy, Debug)]
pub struct BreakpointWatcher {
    breakpoint: f64,
    wide: bool,
}

impl BreakpointWatcher {
    pub fn new(breakpoint: f64, width: f64) -> Self {
        Self {
            breakpoint,
            wide: width >= breakpoint,
        }
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }

    /// `Some(is_wide)` when the crossing happened on this resize.
    pub fn update(&mut self, width: f64) -> Option<bool> {
        let wide = width >= self.breakpoint;
        if wide == self.wide {
            return None;
        }
        self.wide = wide;
        Some(wide)
    }
}
