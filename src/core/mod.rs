//! Platform-free effect logic. Nothing in here touches the DOM, so every
//! module is exercised by the host-side tests.

pub mod composite;
pub mod counter;
pub mod ease;
pub mod frames;
pub mod grid;
pub mod mask;
pub mod motion;
pub mod notch;
pub mod scroll;
pub mod section;
pub mod text;
pub mod theme;
pub mod trigger;
pub mod tween;
pub mod viewport;

pub use composite::{Compositor, MaskTarget, PixelCanvas};
pub use counter::{CounterConfig, CounterInterpolator};
pub use grid::{GridConfig, GridLayout, Rect};
pub use mask::{MaskFrame, MaskMode, MaskParams};
pub use notch::{generate_notch_path, NotchConfig};
pub use scroll::{map_scroll_to_index, ScrollMapper, ScrollUpdate, ThresholdFlip};
pub use section::{SectionCommand, SectionState, VisibilityPolicy};
pub use theme::{Rgb, Theme};
pub use trigger::{Scrub, TriggerRange, TriggerSpec, TriggerState};
pub use viewport::{BreakpointWatcher, Viewport};
