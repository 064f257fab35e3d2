// Host-side tests for the dot grid, alpha masks and the compositor.

use scroll_fx::core::composite::MaskTarget;
use scroll_fx::core::grid::CellKind;
use scroll_fx::core::viewport::Viewport;
use scroll_fx::core::{
    Compositor, GridConfig, GridLayout, MaskFrame, MaskMode, MaskParams, PixelCanvas, Rgb, Theme,
};

#[test]
fn grid_spacing_from_constants() {
    assert_eq!(GridConfig::default().spacing(), 77.0);
}

#[test]
fn grid_500_square() {
    let layout = GridLayout::compute(500.0, 500.0, &GridConfig::default());
    assert_eq!((layout.cols, layout.rows), (7, 7));
    assert_eq!(layout.dots.len(), 49);
    // Right connectors skip the last column, down connectors the last row.
    assert_eq!(layout.lines.len(), 84);
    assert!(layout.dots.iter().all(|d| d.kind == CellKind::Dot));
    assert!(layout.lines.iter().all(|l| l.kind == CellKind::Line));
}

#[test]
fn grid_is_centred() {
    let layout = GridLayout::compute(500.0, 500.0, &GridConfig::default());
    assert_eq!(layout.offset.x, 19.0);
    assert_eq!(layout.offset.y, 19.0);
    let first = layout.dots[0];
    assert_eq!(first.pos.x, 20.5);
    let rect = first.rect();
    assert_eq!((rect.x, rect.w), (19.0, 3.0));
}

#[test]
fn grid_connectors_are_thin() {
    let layout = GridLayout::compute(300.0, 200.0, &GridConfig::default());
    for line in layout.line_rects() {
        assert!(line.w == 1.0 || line.h == 1.0);
        assert!(line.w == 48.0 || line.h == 48.0);
    }
}

#[test]
fn empty_viewport_is_safe() {
    let layout = GridLayout::compute(0.0, 0.0, &GridConfig::default());
    assert_eq!((layout.cols, layout.rows), (0, 0));
    assert!(layout.dots.is_empty() && layout.lines.is_empty());
    assert_eq!(layout.aspect_ratio(), 1.0);
}

#[test]
fn pulse_centre_at_time_zero() {
    let mut mask = MaskFrame::new(15);
    mask.synthesize_pulse(0.0, 1.0);
    // sin(0) mapped to 0.5, squared, scaled to 255.
    assert_eq!(mask.at(7, 7), 64);
}

#[test]
fn pulse_is_symmetric() {
    let mut mask = MaskFrame::new(15);
    mask.synthesize_pulse(1.3, 1.0);
    assert_eq!(mask.at(2, 7), mask.at(12, 7));
    assert_eq!(mask.at(7, 2), mask.at(7, 12));
}

#[test]
fn wave_saturates_on_blob_and_fades_out() {
    let mut mask = MaskFrame::new(15);
    mask.synthesize_wave(0.0, 1.0, &MaskParams::default());
    // First blob sits exactly on pixel (10, 7) at t = 0.
    assert_eq!(mask.at(10, 7), 255);
    assert_eq!(mask.at(0, 0), 0);
}

#[test]
fn mask_rgba_carries_alpha() {
    let mut mask = MaskFrame::new(3);
    mask.synthesize(MaskMode::Pulse, 0.0, 1.0, &MaskParams::default());
    let rgba = mask.to_rgba();
    assert_eq!(rgba.len(), 9);
    assert_eq!(rgba[4], [255, 255, 255, mask.at(1, 1)]);
}

#[test]
fn mask_mode_parses() {
    assert_eq!("pulse".parse::<MaskMode>(), Ok(MaskMode::Pulse));
    assert_eq!("wave".parse::<MaskMode>(), Ok(MaskMode::Wave));
    assert!("ripple".parse::<MaskMode>().is_err());
}

#[test]
fn theme_keys_and_fallback() {
    assert_eq!(Theme::from_key("white"), Theme::White);
    assert_eq!(Theme::from_key("dark"), Theme::Dark);
    assert_eq!(Theme::from_key("purple"), Theme::Green);
    assert_eq!(Theme::White.key(), "white");
    assert_eq!(Theme::Green.palette().dot, Rgb::new(105, 166, 16));
}

#[test]
fn rgb_mix_and_css() {
    let black = Rgb::new(0, 0, 0);
    let white = Rgb::new(255, 255, 255);
    assert_eq!(black.mix(white, 0.0), black);
    assert_eq!(black.mix(white, 1.0), white);
    assert_eq!(black.mix(white, 0.5), Rgb::new(128, 128, 128));
    assert_eq!(Rgb::new(1, 2, 3).css(), "rgb(1, 2, 3)");
}

#[test]
fn compositor_draws_masked_dot() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(500.0, 500.0, 1.0), &mut canvas);
    assert_eq!((canvas.width(), canvas.height()), (500, 500));
    assert_eq!(compositor.layout().dots.len(), 49);

    compositor.render(0.0, &mut canvas);
    assert_eq!(compositor.mask().at(7, 7), 64);
    // Centre dot, under the centre mask pixel.
    assert_eq!(canvas.pixel(251, 251), [105, 166, 16, 64]);
    // Nothing between the grid cells.
    assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(canvas.as_bytes().len(), 500 * 500 * 4);
}

#[test]
fn theme_change_applies_next_frame() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(500.0, 500.0, 1.0), &mut canvas);
    compositor.set_theme(Theme::Dark);
    compositor.set_mode(MaskMode::Pulse);
    assert_eq!(compositor.theme(), Theme::Dark);
    compositor.render(0.0, &mut canvas);
    assert_eq!(canvas.pixel(251, 251), [132, 132, 132, 64]);
}

#[test]
fn canvas_scales_with_device_pixels() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(100.0, 50.0, 2.0), &mut canvas);
    assert_eq!((canvas.width(), canvas.height()), (200, 100));
    compositor.set_mode(MaskMode::Wave);
    compositor.render(0.0, &mut canvas);
    // Grid is 2x1; the second dot spans device pixels 177..183 x 50..56.
    let alpha = compositor.mask().at(13, 7);
    assert!(alpha > 0);
    let [r, g, b] = Theme::Green.palette().dot.0;
    assert_eq!(canvas.pixel(180, 53), [r, g, b, alpha]);
    assert_eq!(canvas.pixel(160, 10), [0, 0, 0, 0]);
}

#[test]
fn repeated_frames_do_not_accumulate() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(500.0, 500.0, 1.0), &mut canvas);
    compositor.render(0.0, &mut canvas);
    compositor.render(0.0, &mut canvas);
    assert_eq!(canvas.pixel(251, 251), [105, 166, 16, 64]);
}

#[test]
fn theme_swap_keeps_the_clock() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(500.0, 500.0, 1.0), &mut canvas);
    compositor.render(1.0, &mut canvas);
    let mask = compositor.mask().clone();
    let before = canvas.pixel(251, 251);
    assert!(before[3] > 0);

    compositor.set_theme(Theme::White);
    compositor.render(1.0, &mut canvas);
    assert_eq!(compositor.mask(), &mask);
    let [r, g, b] = Theme::White.palette().dot.0;
    assert_eq!(canvas.pixel(251, 251), [r, g, b, before[3]]);
    assert_ne!(canvas.pixel(251, 251), before);
}

#[test]
fn zero_viewport_renders_nothing() {
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(Viewport::new(0.0, 0.0, 1.0), &mut canvas);
    assert_eq!((canvas.width(), canvas.height()), (0, 0));
    compositor.render(0.5, &mut canvas);
    canvas.clear();
    assert!(canvas.as_bytes().is_empty());
}
