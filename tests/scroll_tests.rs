// Host-side tests for the scroll-to-index mapping and easing helpers.

use scroll_fx::core::ease::{hold_then_smoothstep, smoothstep, Ease};
use scroll_fx::core::scroll::{
    carousel_index, map_mobile_index, notch_progress, parallax_percent, BEFORE_START,
};
use scroll_fx::core::{map_scroll_to_index, ScrollMapper, ThresholdFlip};

const EPS: f64 = 1e-9;

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert!((smoothstep(0.5) - 0.5).abs() < EPS);
    assert_eq!(smoothstep(-3.0), 0.0);
    assert_eq!(smoothstep(7.0), 1.0);
}

#[test]
fn hold_then_smoothstep_holds_first_half() {
    assert_eq!(hold_then_smoothstep(0.25), 0.0);
    assert_eq!(hold_then_smoothstep(1.49), 1.0);
    assert!((hold_then_smoothstep(1.75) - 1.5).abs() < EPS);
    assert_eq!(hold_then_smoothstep(2.0), 2.0);
}

#[test]
fn ease_curves_hit_endpoints() {
    let curves = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3In,
        Ease::Power3Out,
        Ease::ExpoOut,
        Ease::ExpoInOut,
    ];
    for ease in curves {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        assert_eq!(ease.apply(-1.0), 0.0, "{ease:?} below range");
        assert_eq!(ease.apply(2.0), 1.0, "{ease:?} above range");
        let mid = ease.apply(0.5);
        assert!((0.0..=1.0).contains(&mid), "{ease:?} mid = {mid}");
    }
}

#[test]
fn zero_progress_is_first_item() {
    let m = map_scroll_to_index(0.0, 5).unwrap();
    assert_eq!(m.index, 0);
    assert_eq!(m.eased_progress, 0.0);
}

#[test]
fn full_progress_is_last_item() {
    let m = map_scroll_to_index(1.0, 5).unwrap();
    assert_eq!(m.index, 4);
    assert_eq!(m.eased_progress, 4.0);
}

#[test]
fn no_items_yields_none() {
    assert!(map_scroll_to_index(0.5, 0).is_none());
    assert!(ScrollMapper::new(0).update(0.5).is_none());
}

#[test]
fn mapping_snaps_then_settles() {
    // Held on item 1 during the first half of its segment.
    let held = map_scroll_to_index(0.3, 4).unwrap();
    assert_eq!(held.index, 1);
    assert_eq!(held.eased_progress, 1.0);

    // Past the midpoint the eased value is moving towards item 2.
    let moving = map_scroll_to_index(0.45, 4).unwrap();
    assert!(moving.eased_progress > 1.0 && moving.eased_progress < 2.0);
    assert_eq!(moving.index, 2);

    let exact = map_scroll_to_index(0.5, 4).unwrap();
    assert_eq!(exact.index, 2);
    assert_eq!(exact.eased_progress, 2.0);
}

#[test]
fn mapping_stays_in_bounds_and_is_monotonic() {
    for n in 1..=9 {
        let mut last_index = 0;
        let mut last_eased = 0.0;
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let m = map_scroll_to_index(p, n).unwrap();
            assert!(m.index < n);
            assert!(m.eased_progress >= 0.0 && m.eased_progress <= (n - 1) as f64);
            assert!(m.index >= last_index, "index went back at p={p} n={n}");
            assert!(m.eased_progress >= last_eased - EPS, "eased went back at p={p}");
            last_index = m.index;
            last_eased = m.eased_progress;
        }
    }
}

#[test]
fn mapping_is_idempotent() {
    for p in [0.0, 0.13, 0.5, 0.77, 1.0] {
        assert_eq!(map_scroll_to_index(p, 6), map_scroll_to_index(p, 6));
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(map_scroll_to_index(-0.4, 3), map_scroll_to_index(0.0, 3));
    assert_eq!(map_scroll_to_index(1.8, 3), map_scroll_to_index(1.0, 3));
}

#[test]
fn mapper_reports_index_change_once() {
    let mut mapper = ScrollMapper::new(4);
    assert_eq!(mapper.current_index(), BEFORE_START);

    let first = mapper.update(0.0).unwrap();
    let change = first.index_change.unwrap();
    assert_eq!((change.previous, change.current), (BEFORE_START, 0));

    let again = mapper.update(0.0).unwrap();
    assert!(again.index_change.is_none());

    let jump = mapper.update(0.5).unwrap();
    let change = jump.index_change.unwrap();
    assert_eq!((change.previous, change.current), (0, 2));
    assert_eq!(mapper.state().previous_index, 0);
}

#[test]
fn mapper_derives_continuous_values_every_tick() {
    let mut mapper = ScrollMapper::new(4);
    mapper.update(0.5);
    let update = mapper.update(0.5).unwrap();
    assert!(update.index_change.is_none());
    assert_eq!(update.eased_progress, 2.0);
    assert_eq!(update.counter_target, 3.0);
    assert!((update.bar_fill - (0.07 + 0.93 * 2.0 / 3.0)).abs() < 1e-9);
    assert_eq!(update.notch_progress.as_slice(), &[1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn mapper_reset_returns_to_sentinel() {
    let mut mapper = ScrollMapper::new(3);
    mapper.update(1.0);
    assert_eq!(mapper.current_index(), 2);
    mapper.reset(5);
    assert_eq!(mapper.current_index(), BEFORE_START);
    assert_eq!(mapper.state().item_count, 5);
    assert_eq!(mapper.eased_progress(), 0.0);
}

#[test]
fn notch_progress_opens_per_item() {
    assert_eq!(notch_progress(1.5, 0), 1.0);
    assert_eq!(notch_progress(1.5, 1), 0.5);
    assert_eq!(notch_progress(1.5, 2), 0.0);
}

#[test]
fn mobile_index_waits_for_lead_in() {
    assert_eq!(map_mobile_index(0.0, 4), BEFORE_START);
    assert_eq!(map_mobile_index(0.04, 4), BEFORE_START);
    assert_eq!(map_mobile_index(0.05, 4), 0);
    assert_eq!(map_mobile_index(0.5, 4), 1);
    assert_eq!(map_mobile_index(1.0, 4), 3);
    assert_eq!(map_mobile_index(0.5, 0), BEFORE_START);
}

#[test]
fn carousel_rounds_to_nearest_card() {
    assert_eq!(carousel_index(0.0, 425.0), 0);
    assert_eq!(carousel_index(850.0, 425.0), 2);
    assert_eq!(carousel_index(600.0, 425.0), 1);
    assert_eq!(carousel_index(600.0, 0.0), 0);
}

#[test]
fn parallax_spans_symmetric_range() {
    assert_eq!(parallax_percent(0.0), -15.0);
    assert_eq!(parallax_percent(0.5), 0.0);
    assert_eq!(parallax_percent(1.0), 15.0);
    assert_eq!(parallax_percent(3.0), 15.0);
}

#[test]
fn threshold_flip_reports_crossings_only() {
    let mut flip = ThresholdFlip::new(0.99);
    assert_eq!(flip.update(0.5), None);
    assert_eq!(flip.update(0.995), Some(true));
    assert!(flip.is_past());
    assert_eq!(flip.update(1.0), None);
    assert_eq!(flip.update(0.2), Some(false));
    assert_eq!(flip.update(0.1), None);
}
