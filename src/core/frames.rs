//! Image-sequence "video" scrubbed by scroll position.

/// Expand `{index}` in `template` for `count` frames starting at `start`,
/// zero-padding the number to four digits.
pub fn frame_urls(template: &str, count: usize, start: usize) -> Vec<String> {
    (start..start + count)
        .map(|i| template.replace("{index}", &format!("{i:04}")))
        .collect()
}

/// Frame for a scroll fraction: `min(floor(p · count), count − 1)`.
pub fn frame_for_progress(progress: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let idx = (progress.clamp(0.0, 1.0) * count as f64).floor() as usize;
    Some(idx.min(count - 1))
}

#[derive(Clone, Debug)]
pub struct FrameSequence {
    loaded: Vec<bool>,
    current: usize,
}

impl FrameSequence {
    pub fn new(count: usize) -> Self {
        Self {
            loaded: vec![false; count],
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn mark_loaded(&mut self, frame: usize) {
        if let Some(slot) = self.loaded.get_mut(frame) {
            *slot = true;
        }
    }

    pub fn is_loaded(&self, frame: usize) -> bool {
        self.loaded.get(frame).copied().unwrap_or(false)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|l| **l).count()
    }

    pub fn is_ready(&self) -> bool {
        !self.loaded.is_empty() && self.loaded.iter().all(|l| *l)
    }

    /// Returns the frame to draw when scrolling moved onto a different,
    /// already loaded frame.
    pub fn update(&mut self, progress: f64) -> Option<usize> {
        let frame = frame_for_progress(progress, self.len())?;
        if frame == self.current || !self.is_loaded(frame) {
            return None;
        }
        self.current = frame;
        Some(frame)
    }
}
