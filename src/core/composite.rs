//! Masked grid compositing.
//!
//! Each frame: clear the visible surface, synthesize the mask, then for each
//! grid layer (dots, then lines) render the pre-computed rectangles into an
//! offscreen layer, keep only what the stretched mask covers
//! (destination-in) and blit the result.

use super::grid::{GridConfig, GridLayout, Rect};
use super::mask::{MaskFrame, MaskMode, MaskParams};
use super::theme::{Rgb, Theme};
use super::viewport::Viewport;
use crate::constants::PULSE_TIME_SCALE;

/// A drawing surface able to stencil a layer with a mask.
pub trait MaskTarget {
    fn resize(&mut self, viewport: &Viewport);
    fn clear(&mut self);
    fn draw_masked_layer(&mut self, color: Rgb, rects: &[Rect], mask: &MaskFrame);
}

/// Owns the background state for one canvas.
#[derive(Clone, Debug)]
pub struct Compositor {
    config: GridConfig,
    params: MaskParams,
    layout: GridLayout,
    dot_rects: Vec<Rect>,
    line_rects: Vec<Rect>,
    mask: MaskFrame,
    theme: Theme,
    mode: MaskMode,
}

impl Compositor {
    pub fn new(config: GridConfig, params: MaskParams) -> Self {
        Self {
            config,
            params,
            layout: GridLayout::default(),
            dot_rects: Vec::new(),
            line_rects: Vec::new(),
            mask: MaskFrame::new(params.size),
            theme: Theme::default(),
            mode: MaskMode::default(),
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn mask(&self) -> &MaskFrame {
        &self.mask
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn mode(&self) -> MaskMode {
        self.mode
    }

    /// Takes effect on the next rendered frame; the clock is untouched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_mode(&mut self, mode: MaskMode) {
        self.mode = mode;
    }

    /// Recompute grid geometry for a new viewport and resize the target.
    pub fn resize(&mut self, viewport: Viewport, target: &mut impl MaskTarget) {
        target.resize(&viewport);
        self.layout = GridLayout::compute(viewport.width, viewport.height, &self.config);
        self.dot_rects = self.layout.dot_rects().collect();
        self.line_rects = self.layout.line_rects().collect();
        log::debug!(
            "[background] grid {}x{} ({} dots, {} lines)",
            self.layout.cols,
            self.layout.rows,
            self.dot_rects.len(),
            self.line_rects.len()
        );
    }

    /// Draw one frame for `elapsed` seconds since the animation started.
    pub fn render(&mut self, elapsed: f64, target: &mut impl MaskTarget) {
        target.clear();
        let aspect = self.layout.aspect_ratio();
        let time = match self.mode {
            MaskMode::Pulse => elapsed * PULSE_TIME_SCALE,
            MaskMode::Wave => elapsed,
        };
        self.mask.synthesize(self.mode, time, aspect, &self.params);
        let palette = self.theme.palette();
        target.draw_masked_layer(palette.dot, &self.dot_rects, &self.mask);
        target.draw_masked_layer(palette.line, &self.line_rects, &self.mask);
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(GridConfig::default(), MaskParams::default())
    }
}

/// CPU RGBA surface implementing [`MaskTarget`]; also handy for snapshots.
#[derive(Clone, Debug, Default)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    scale: f64,
    pixels: Vec<[u8; 4]>,
    layer: Vec<[u8; 4]>,
}

impl PixelCanvas {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn fill_layer(&mut self, color: Rgb, rects: &[Rect]) {
        self.layer.fill([0; 4]);
        let [r, g, b] = color.0;
        // A pixel is covered when its centre falls inside the rect.
        let scale = self.scale;
        let edge = |v: f64, limit: usize| ((v * scale - 0.5).ceil().max(0.0) as usize).min(limit);
        for rect in rects {
            let x0 = edge(rect.x, self.width);
            let x1 = edge(rect.x + rect.w, self.width);
            let y0 = edge(rect.y, self.height);
            let y1 = edge(rect.y + rect.h, self.height);
            if x0 >= x1 {
                continue;
            }
            for y in y0..y1 {
                let row = y * self.width;
                self.layer[row + x0..row + x1].fill([r, g, b, 255]);
            }
        }
    }

    fn apply_mask(&mut self, mask: &MaskFrame) {
        let size = mask.size();
        if size == 0 {
            self.layer.fill([0; 4]);
            return;
        }
        for y in 0..self.height {
            let my = (y * size / self.height).min(size - 1);
            for x in 0..self.width {
                let mx = (x * size / self.width).min(size - 1);
                let px = &mut self.layer[y * self.width + x];
                px[3] = ((px[3] as u32 * mask.at(mx, my) as u32 + 127) / 255) as u8;
            }
        }
    }

    fn blit_layer(&mut self) {
        for (dst, src) in self.pixels.iter_mut().zip(&self.layer) {
            let sa = src[3] as u32;
            if sa == 0 {
                continue;
            }
            let da = dst[3] as u32;
            let out_a = sa + da * (255 - sa) / 255;
            for c in 0..3 {
                let blended = (src[c] as u32 * sa + dst[c] as u32 * da * (255 - sa) / 255)
                    / out_a.max(1);
                dst[c] = blended.min(255) as u8;
            }
            dst[3] = out_a.min(255) as u8;
        }
    }
}

impl MaskTarget for PixelCanvas {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = if viewport.width > 0.0 && viewport.height > 0.0 {
            let (w, h) = viewport.device_size();
            (w as usize, h as usize)
        } else {
            (0, 0)
        };
        self.width = w;
        self.height = h;
        self.scale = viewport.dpr;
        self.pixels = vec![[0; 4]; w * h];
        self.layer = vec![[0; 4]; w * h];
    }

    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn draw_masked_layer(&mut self, color: Rgb, rects: &[Rect], mask: &MaskFrame) {
        if self.pixels.is_empty() {
            return;
        }
        self.fill_layer(color, rects);
        self.apply_mask(mask);
        self.blit_layer();
    }
}
