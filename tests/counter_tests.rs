// Host-side tests for the counter, progress bar and time-based tweens.

use scroll_fx::core::counter::{
    bar_fill, counter_target, digit_offset, odometer_digits, overlay_fade,
};
use scroll_fx::core::ease::Ease;
use scroll_fx::core::tween::{Playhead, TweenSlot};
use scroll_fx::core::{CounterConfig, CounterInterpolator};

const EPS: f64 = 1e-9;

#[test]
fn counter_target_is_one_based_and_clamped() {
    assert_eq!(counter_target(0.0, 4), 1.0);
    assert_eq!(counter_target(1.4, 4), 2.0);
    assert_eq!(counter_target(3.0, 4), 4.0);
    assert_eq!(counter_target(10.0, 4), 4.0);
    assert_eq!(counter_target(-1.0, 4), 1.0);
    assert_eq!(counter_target(2.0, 0), 1.0);
}

#[test]
fn bar_fill_never_empty() {
    assert_eq!(bar_fill(0.0, 4, 0.07), 0.07);
    assert!((bar_fill(3.0, 4, 0.07) - 1.0).abs() < EPS);
    assert!((bar_fill(1.5, 4, 0.07) - 0.535).abs() < EPS);
    // A single item never moves off the minimum.
    assert_eq!(bar_fill(5.0, 1, 0.07), 0.07);
}

#[test]
fn odometer_pads_to_two_digits() {
    assert_eq!(odometer_digits(3), [0, 3]);
    assert_eq!(odometer_digits(12), [1, 2]);
    assert_eq!(odometer_digits(123), [2, 3]);
    assert_eq!(digit_offset(3, 26.0), -78.0);
    assert_eq!(digit_offset(0, 26.0), 0.0);
}

#[test]
fn tween_slot_retarget_starts_from_displayed_value() {
    let mut slot = TweenSlot::new(0.0, 1.0, Ease::Linear);
    slot.retarget(0.0, 10.0);
    assert!((slot.value(0.5) - 5.0).abs() < EPS);

    // Interrupting mid-flight: last write wins, no jump.
    slot.retarget(0.5, 20.0);
    assert_eq!(slot.target(), 20.0);
    assert!((slot.value(0.5) - 5.0).abs() < EPS);
    assert!((slot.value(1.0) - 12.5).abs() < EPS);
    assert_eq!(slot.value(1.5), 20.0);
}

#[test]
fn tween_slot_same_target_is_noop() {
    let mut slot = TweenSlot::new(0.0, 1.0, Ease::Linear);
    slot.retarget(0.0, 10.0);
    slot.retarget(0.7, 10.0);
    // Still running the tween that started at 0.
    assert!((slot.value(0.5) - 5.0).abs() < EPS);
}

#[test]
fn tween_slot_step_folds_finished_tween() {
    let mut slot = TweenSlot::new(1.0, 0.5, Ease::Power2Out);
    slot.retarget(0.0, 3.0);
    assert!(slot.is_animating(0.2));
    assert_eq!(slot.step(2.0), 3.0);
    assert!(!slot.is_animating(2.0));
    slot.set(7.0);
    assert_eq!(slot.value(100.0), 7.0);
}

#[test]
fn overlay_fade_overwrites_in_flight_fade() {
    let mut overlay = overlay_fade();
    assert_eq!(overlay.value(0.0), 1.0);
    overlay.retarget(0.0, 0.0);
    // Quadratic ease-out: half the time covers three quarters of the way.
    assert!((overlay.value(0.05) - 0.25).abs() < EPS);
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < EPS);

    overlay.retarget(0.05, 0.6);
    assert!((overlay.value(0.05) - 0.25).abs() < EPS);
    assert!(overlay.is_animating(0.1));
    assert_eq!(overlay.step(0.3), 0.6);
    assert!(!overlay.is_animating(0.3));
}

#[test]
fn interpolator_starts_at_first_item() {
    let counter = CounterInterpolator::new(4, CounterConfig::default());
    assert_eq!(counter.item_count(), 4);
    assert_eq!(counter.counter_value(0.0), 1.0);
    assert_eq!(counter.bar_fill(0.0), 0.07);
    assert!(!counter.is_animating(0.0));
}

#[test]
fn interpolator_animates_towards_progress() {
    let mut counter = CounterInterpolator::new(4, CounterConfig::default());
    counter.set_progress(0.0, 3.0);
    assert!(counter.is_animating(0.1));
    let mid = counter.counter_value(0.3);
    assert!(mid > 1.0 && mid < 4.0);

    // Bar tween is shorter than the counter tween.
    assert!((counter.bar_fill(0.2) - 1.0).abs() < EPS);
    assert!(counter.is_animating(0.3));
    assert_eq!(counter.counter_value(0.6), 4.0);
    assert!(!counter.is_animating(0.6));

    counter.step(1.0);
    assert_eq!(counter.displayed_counter(1.0), 4);
    assert!((counter.counter_offset(1.0, 193.0) - 193.0).abs() < 1e-6);
}

#[test]
fn interpolator_reset_snaps_back() {
    let mut counter = CounterInterpolator::new(5, CounterConfig::default());
    counter.set_progress(0.0, 4.0);
    counter.reset();
    assert_eq!(counter.counter_value(0.1), 1.0);
    assert_eq!(counter.bar_fill(0.1), 0.07);
    assert_eq!(counter.displayed_counter(0.1), 1);
}

#[test]
fn playhead_is_still_until_played() {
    let head = Playhead::new(1.0);
    assert_eq!(head.duration(), 1.0);
    assert_eq!(head.position(5.0), 0.0);
    assert!(!head.is_moving(5.0));
}

#[test]
fn playhead_plays_and_reverses() {
    let mut head = Playhead::new(1.0);
    head.play(0.0);
    assert!((head.position(0.4) - 0.4).abs() < EPS);
    assert!(head.is_moving(0.4));
    assert_eq!(head.position(2.0), 1.0);
    assert!(!head.is_moving(2.0));

    head.reverse(2.0);
    assert!((head.position(2.25) - 0.75).abs() < EPS);
    assert!(head.is_moving(2.25));
    assert_eq!(head.position(5.0), 0.0);
    assert!(!head.is_moving(5.0));
}

#[test]
fn playhead_reverse_mid_flight_turns_around() {
    let mut head = Playhead::new(1.0);
    head.play(0.0);
    head.reverse(0.3);
    assert!((head.position(0.4) - 0.2).abs() < EPS);
}
