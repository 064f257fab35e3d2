//! Tiny per-frame alpha masks for the background grid.
//!
//! The buffer is regenerated every frame at a fixed low resolution and
//! stretched over the viewport when compositing. Pixels are sampled at their
//! centres, so for an odd size the middle pixel sits exactly on the centre.

use std::f64::consts::PI;
use std::str::FromStr;

use glam::DVec2;
use smallvec::SmallVec;

use crate::constants::{MASK_SIZE, MASK_WAVE_COUNT, MASK_WAVE_PHASE_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaskMode {
    #[default]
    Pulse,
    Wave,
}

impl FromStr for MaskMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pulse" => Ok(Self::Pulse),
            "wave" => Ok(Self::Wave),
            _ => Err(format!("unknown mask mode `{s}`")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskParams {
    pub size: usize,
    pub waves: usize,
    pub phase_step: f64,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            size: MASK_SIZE,
            waves: MASK_WAVE_COUNT,
            phase_step: MASK_WAVE_PHASE_STEP,
        }
    }
}

/// Square alpha buffer, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskFrame {
    size: usize,
    alpha: Vec<u8>,
}

impl MaskFrame {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            alpha: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.alpha[y * self.size + x]
    }

    /// White RGBA pixels carrying the mask in their alpha channel, ready to
    /// be uploaded as image data.
    pub fn to_rgba(&self) -> Vec<[u8; 4]> {
        self.alpha.iter().map(|&a| [255, 255, 255, a]).collect()
    }

    #[inline]
    fn sample_point(x: usize, y: usize) -> DVec2 {
        DVec2::new(x as f64 + 0.5, y as f64 + 0.5)
    }

    #[inline]
    fn distance(p: DVec2, centre: DVec2, aspect: f64) -> f64 {
        let d = (p - centre).abs();
        DVec2::new(d.x * aspect, d.y).length()
    }

    /// Concentric rings travelling outward from the centre.
    pub fn synthesize_pulse(&mut self, time: f64, aspect: f64) {
        let size = self.size as f64;
        let centre = DVec2::splat(size * 0.5);
        for y in 0..self.size {
            for x in 0..self.size {
                let distance = Self::distance(Self::sample_point(x, y), centre, aspect);
                let wave = ((distance / size * PI * 5.0 - time * 2.0).sin() + 1.0) / 2.0;
                self.alpha[y * self.size + x] = (wave * wave * 255.0).round() as u8;
            }
        }
    }

    /// Additive radial blobs orbiting the centre on an ellipse.
    pub fn synthesize_wave(&mut self, time: f64, aspect: f64, params: &MaskParams) {
        let size = self.size as f64;
        let radius = size * 0.55;
        let blobs: SmallVec<[DVec2; 4]> = (0..params.waves)
            .map(|w| {
                let phase = time + w as f64 * params.phase_step;
                DVec2::new(
                    phase.cos() * size * 0.2 + size * 0.5,
                    phase.sin() * size * 0.35 + size * 0.5,
                )
            })
            .collect();

        self.alpha.fill(0);
        for y in 0..self.size {
            for x in 0..self.size {
                let p = Self::sample_point(x, y);
                let idx = y * self.size + x;
                for centre in &blobs {
                    let falloff = (1.0 - Self::distance(p, *centre, aspect) / radius).max(0.0);
                    let add = (falloff * 255.0).floor() as u8;
                    self.alpha[idx] = self.alpha[idx].saturating_add(add);
                }
            }
        }
    }

    pub fn synthesize(&mut self, mode: MaskMode, time: f64, aspect: f64, params: &MaskParams) {
        match mode {
            MaskMode::Pulse => self.synthesize_pulse(time, aspect),
            MaskMode::Wave => self.synthesize_wave(time, aspect, params),
        }
    }
}
