// Host-side tests for the decorative motion curves.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use scroll_fx::core::grid::Rect;
use scroll_fx::core::motion::*;

const EPS: f64 = 1e-9;

#[test]
fn flicker_delay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let d = flicker_delay(&mut rng);
        assert!((0.0..2.0).contains(&d));
    }
}

#[test]
fn cross_holds_before_delay_then_loops() {
    assert_eq!(cross_flicker_scale(0.5, 1.0), 1.0);
    assert!((cross_flicker_scale(2.25, 1.0) - 0.5).abs() < EPS);
    assert_eq!(cross_flicker_scale(3.5, 1.0), 0.0);
    // One full period later it is back to full size.
    assert!((cross_flicker_scale(6.0, 1.0) - 1.0).abs() < 1e-6);
    for i in 0..200 {
        let s = cross_flicker_scale(i as f64 * 0.05, 0.3);
        assert!((0.0..=1.0).contains(&s));
    }
}

#[test]
fn logos_fade_in_sequence() {
    assert_eq!(logo_fade_opacity(0.0, 0), 0.3);
    assert_eq!(logo_fade_opacity(0.1, 1), 0.3);
    assert!(logo_fade_opacity(0.2, 0) > logo_fade_opacity(0.2, 1));
    assert_eq!(logo_fade_opacity(10.0, 5), 1.0);
}

#[test]
fn border_glow_follows_pointer() {
    let wrapper = Rect {
        x: 100.0,
        y: 1000.0,
        w: 400.0,
        h: 200.0,
    };
    assert_eq!(
        border_hover_transform(DVec2::new(150.0, 80.0), &wrapper, 950.0),
        "translate3d(calc(50px - 50%), calc(30px - 50%), 0)"
    );
}

#[test]
fn flip_between_rects() {
    let from = Rect {
        x: 0.0,
        y: 0.0,
        w: 10.0,
        h: 20.0,
    };
    let to = Rect {
        x: 100.0,
        y: 50.0,
        w: 5.0,
        h: 10.0,
    };
    let flip = FlipTransform::between(&from, &to);
    assert_eq!(flip.offset, DVec2::new(-97.5, -45.0));
    assert_eq!(flip.scale, 2.0);
    assert_eq!(flip.towards_identity(0.0), flip);
    assert_eq!(flip.towards_identity(1.0), FlipTransform::IDENTITY);
    let half = flip.towards_identity(0.5);
    assert_eq!(half.scale, 1.5);
    assert_eq!(
        FlipTransform::IDENTITY.css(),
        "translate(0.00px, 0.00px) scale(1.0000)"
    );
}

#[test]
fn flip_with_collapsed_target_keeps_scale() {
    let r = Rect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };
    assert_eq!(FlipTransform::between(&r, &r).scale, 1.0);
}

#[test]
fn yos_timelines() {
    assert!((yos_timeline_time(0.5, true) - 1.5).abs() < EPS);
    assert!((yos_timeline_time(0.5, false) - 1.0).abs() < EPS);
    assert_eq!(yos_timeline_time(2.0, true), 3.0);
}

#[test]
fn yos_morph_waits_for_fade() {
    assert_eq!(yos_morph(0.5), 0.0);
    assert_eq!(yos_morph(1.0), 0.0);
    assert_eq!(yos_morph(3.0), 1.0);
    let mid = yos_morph(2.0);
    assert!(mid > 0.0 && mid < 0.5);
}

#[test]
fn yos_letters_fade_from_the_end() {
    assert_eq!(yos_letter_opacity(0.0, 0, 4), 1.0);
    assert!((yos_letter_opacity(0.25, 3, 4) - 0.5).abs() < EPS);
    assert!((yos_letter_opacity(0.25, 0, 4) - 0.8).abs() < EPS);
    assert_eq!(yos_letter_opacity(5.0, 0, 4), 0.0);
}

#[test]
fn yos_mobile_letters_stagger_in() {
    assert_eq!(yos_mobile_letter_opacity(1.0, 0), 0.0);
    assert_eq!(yos_mobile_letter_opacity(1.5, 0), 1.0);
    assert!((yos_mobile_letter_opacity(1.2, 1) - 0.25).abs() < EPS);
    assert_eq!(yos_mobile_letter_opacity(0.0, 3), 0.0);
}

#[test]
fn indicator_bounces_and_rests() {
    assert_eq!(indicator_offset(0.0), 0.0);
    assert_eq!(indicator_offset(-1.0), 0.0);
    assert!((indicator_offset(1.2) - 15.0).abs() < 1e-6);
    assert_eq!(indicator_offset(2.5), 0.0);
    for i in 0..300 {
        let y = indicator_offset(i as f64 * 0.02);
        assert!((0.0..=15.0).contains(&y), "offset {y}");
    }
}
