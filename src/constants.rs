/// Layout, timing and palette tuning constants.
///
/// These express the intended feel of each effect (breakpoints, tween
/// durations, thresholds) and keep magic numbers out of the mapping code.

// Breakpoints (CSS pixels)
pub const DESKTOP_BREAKPOINT: f64 = 1024.0; // sections switch to pinned desktop layout
pub const YOS_BREAKPOINT: f64 = 768.0; // YOS heading keeps letter morph above this

// Scroll mapping
pub const THEME_FLIP_THRESHOLD: f64 = 0.99; // green -> white palette flip point
pub const MOBILE_LEAD_IN: f64 = 0.05; // progress before the first mobile item appears
pub const SCRUB_LAG_SEC: f64 = 0.5; // smoothing applied to scrubbed progress

// Counter and progress bar
pub const MIN_BAR_FILL: f64 = 0.07; // bar never renders fully empty
pub const COUNTER_TWEEN_SEC: f64 = 0.6;
pub const PROGRESS_BAR_TWEEN_SEC: f64 = 0.2;
pub const OVERLAY_FADE_SEC: f64 = 0.1; // desktop image overlay follows the notch
pub const FALLBACK_BAR_HEIGHT_PX: f64 = 193.0; // used when the bar has no layout yet
pub const FALLBACK_DIGIT_HEIGHT_PX: f64 = 26.0;

// Background grid (CSS pixels)
pub const GRID_DOT_SIZE: f64 = 3.0;
pub const GRID_CELL_SIZE: f64 = 48.0;
pub const GRID_PADDING: f64 = 13.0;

// Background mask
pub const MASK_SIZE: usize = 15; // logical mask resolution, scaled up when compositing
pub const MASK_WAVE_COUNT: usize = 3;
pub const MASK_WAVE_PHASE_STEP: f64 = 0.6; // radians between successive wave blobs
pub const PULSE_TIME_SCALE: f64 = 1.8; // pulse rings run faster than the wave blobs

// Notch mask
pub const NOTCH_POSITION: f64 = 0.5;
pub const NOTCH_SIZE: f64 = 0.4;
pub const NOTCH_OFFSET_PX: f64 = 30.0;
pub const NOTCH_RADIUS_PX: f64 = 8.0;
pub const NOTCH_WIDTH: f64 = 0.9;
pub const NOTCH_OFFSET_DESKTOP_PX: f64 = 40.0;
pub const NOTCH_OFFSET_MOBILE_PX: f64 = 20.0;
pub const NOTCH_SCROLL_MIN: f64 = 0.3; // notch travels 0.3 -> 0.7 across the section
pub const NOTCH_SCROLL_SPAN: f64 = 0.4;

// Text reveal
pub const TITLE_REVEAL_SPEED: f64 = 4.0; // how quickly each char fades in behind the sweep
pub const MOBILE_CHAR_DELAY_SEC: f64 = 0.014;
pub const SWEEP_STAGGER_SEC: f64 = 0.015;
pub const SWEEP_ACCENT_SEC: f64 = 0.4;
pub const SWEEP_SETTLE_DELAY_SEC: f64 = 0.25;
pub const SWEEP_SETTLE_SEC: f64 = 0.5;
pub const CAROUSEL_ITEM_WIDTH: f64 = 0.85; // card width as a fraction of the list

// Decorative motion
pub const FLICKER_HALF_PERIOD_SEC: f64 = 2.5;
pub const FLICKER_MAX_DELAY_SEC: f64 = 2.0;
pub const LOGO_FADE_FROM: f64 = 0.3;
pub const LOGO_FADE_SEC: f64 = 0.5;
pub const LOGO_FADE_STAGGER_SEC: f64 = 0.1;
pub const PARALLAX_RANGE_PERCENT: f64 = 15.0;

// Hero frame sequence
pub const HERO_FRAME_COUNT: usize = 301;
pub const HERO_FRAME_START: usize = 1;
pub const HERO_DESKTOP_FRAMES: &str =
    "/assets/images/hero-desktop-webp/HERO_{index}_converted.webp";
pub const HERO_MOBILE_FRAMES: &str =
    "/assets/images/hero-mobile-webp/HERO MW_{index}_converted.webp";
pub const LOADER_FADE_SEC: f64 = 0.5;
pub const INDICATOR_TRAVEL_PX: f64 = 15.0; // 27px track minus the 12px thumb
pub const INDICATOR_LEG_SEC: f64 = 1.2;
pub const INDICATOR_REPEAT_DELAY_SEC: f64 = 0.3;

// YOS heading
pub const YOS_HEADING: &str = "Yard Operating System.";

// Palette (sRGB)
pub const ACCENT_RGB: [u8; 3] = [0xab, 0xff, 0x02];
pub const SETTLED_RGB: [u8; 3] = [0x05, 0x24, 0x24];
pub const TITLE_RGB: [u8; 3] = [0xff, 0xff, 0xff];
