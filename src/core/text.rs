//! Character-level text reveal.
//!
//! The DOM layer splits headings into per-character spans; these functions
//! decide what each span looks like for a given scroll position or time.

use super::ease::{clamp, Ease};
use super::theme::Rgb;
use crate::constants::{
    ACCENT_RGB, MOBILE_CHAR_DELAY_SEC, SETTLED_RGB, SWEEP_ACCENT_SEC, SWEEP_SETTLE_DELAY_SEC,
    SWEEP_SETTLE_SEC, SWEEP_STAGGER_SEC, TITLE_REVEAL_SPEED,
};

pub fn split_chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Words with their characters, separated on single spaces.
pub fn split_words(text: &str) -> Vec<Vec<char>> {
    text.split(' ').map(|w| w.chars().collect()).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharStyle {
    pub opacity: f64,
    /// Drawn in the accent colour while still fading in.
    pub accent: bool,
}

impl CharStyle {
    pub const HIDDEN: CharStyle = CharStyle {
        opacity: 0.0,
        accent: true,
    };
}

/// Index of the title being revealed and how far through it we are.
pub fn active_title(progress: f64, title_count: usize) -> Option<(usize, f64)> {
    if title_count == 0 {
        return None;
    }
    let mapped = clamp(progress, 0.0, 1.0) * title_count as f64;
    let active = mapped.floor() as usize;
    if active >= title_count {
        return None;
    }
    Some((active, mapped - active as f64))
}

/// Per-character styles for a stack of titles revealed one after another.
/// `char_counts[t]` is the number of characters in title `t`.
pub fn reveal_titles(progress: f64, char_counts: &[usize]) -> Vec<Vec<CharStyle>> {
    let active = active_title(progress, char_counts.len());
    char_counts
        .iter()
        .enumerate()
        .map(|(t, &len)| match active {
            Some((idx, local)) if idx == t => (0..len)
                .map(|i| {
                    let ratio = i as f64 / len as f64;
                    let opacity = clamp((local - ratio) * TITLE_REVEAL_SPEED, 0.0, 1.0);
                    CharStyle {
                        opacity,
                        accent: opacity < 1.0,
                    }
                })
                .collect(),
            _ => vec![CharStyle::HIDDEN; len],
        })
        .collect()
}

/// CSS transition delays for the mobile reveal; spaces get no span.
pub fn mobile_char_delays(text: &str) -> Vec<Option<f64>> {
    text.chars()
        .enumerate()
        .map(|(i, c)| (c != ' ').then(|| i as f64 * MOBILE_CHAR_DELAY_SEC))
        .collect()
}

/// Colour of character `index` at `time` seconds into the desktop sweep:
/// base -> accent, then accent -> settled, staggered per character.
pub fn sweep_tint(time: f64, index: usize, base: Rgb) -> Rgb {
    let offset = index as f64 * SWEEP_STAGGER_SEC;
    let accent_t = Ease::Power2InOut.apply((time - offset) / SWEEP_ACCENT_SEC);
    let settle_t =
        Ease::Power2InOut.apply((time - SWEEP_SETTLE_DELAY_SEC - offset) / SWEEP_SETTLE_SEC);
    let accent = Rgb(ACCENT_RGB);
    base.mix(accent, accent_t).mix(Rgb(SETTLED_RGB), settle_t)
}
