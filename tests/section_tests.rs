// Host-side tests for section visibility commands, navigation and breakpoints.

use scroll_fx::constants::DESKTOP_BREAKPOINT;
use scroll_fx::core::scroll::BEFORE_START;
use scroll_fx::core::section::arrow_direction;
use scroll_fx::core::{
    BreakpointWatcher, Compositor, GridConfig, GridLayout, PixelCanvas, ScrollMapper,
    SectionCommand, SectionState, Viewport, VisibilityPolicy,
};

use SectionCommand::{Hide, PauseMedia, PlayMedia, Show};

#[test]
fn only_current_shows_one_item() {
    let mut state = SectionState::new(3, VisibilityPolicy::OnlyCurrent);
    assert_eq!(state.current(), BEFORE_START);
    assert_eq!(
        state.set_index(0),
        vec![Show(0), PlayMedia(0), Hide(1), Hide(2)]
    );
    assert!(state.is_playing(0));
    assert_eq!(
        state.set_index(2),
        vec![Hide(0), PauseMedia(0), Hide(1), Show(2), PlayMedia(2)]
    );
    assert!(!state.is_playing(0));
}

#[test]
fn unchanged_index_emits_nothing() {
    let mut state = SectionState::new(3, VisibilityPolicy::OnlyCurrent);
    state.set_index(1);
    assert!(state.set_index(1).is_empty());
    // Clamped onto the last item, then repeated.
    state.set_index(9);
    assert_eq!(state.current(), 2);
    assert!(state.set_index(40).is_empty());
}

#[test]
fn up_to_current_keeps_earlier_items() {
    let mut state = SectionState::new(3, VisibilityPolicy::UpToCurrent);
    assert_eq!(
        state.set_index(1),
        vec![Show(0), PlayMedia(0), Show(1), PlayMedia(1), Hide(2)]
    );
    assert_eq!(
        state.set_index(BEFORE_START),
        vec![Hide(0), PauseMedia(0), Hide(1), PauseMedia(1), Hide(2)]
    );
}

#[test]
fn rebuild_pauses_everything() {
    let mut state = SectionState::new(3, VisibilityPolicy::UpToCurrent);
    state.set_index(1);
    assert_eq!(
        state.rebuild(VisibilityPolicy::OnlyCurrent),
        vec![PauseMedia(0), PauseMedia(1)]
    );
    assert_eq!(state.current(), BEFORE_START);
    assert_eq!(state.policy(), VisibilityPolicy::OnlyCurrent);
    assert!(state.rebuild(VisibilityPolicy::UpToCurrent).is_empty());
}

#[test]
fn navigate_stays_in_range() {
    let mut state = SectionState::new(3, VisibilityPolicy::OnlyCurrent);
    state.set_index(0);
    assert!(state.prev_disabled());
    assert!(state.navigate(-1).is_empty());

    assert!(!state.navigate(1).is_empty());
    assert_eq!(state.current(), 1);
    assert!(!state.prev_disabled() && !state.next_disabled());

    state.navigate(1);
    assert!(state.next_disabled());
    assert!(state.navigate(1).is_empty());
    assert_eq!(state.current(), 2);
}

#[test]
fn empty_section_is_inert() {
    let mut state = SectionState::new(0, VisibilityPolicy::OnlyCurrent);
    assert!(state.set_index(0).is_empty());
    assert!(state.navigate(1).is_empty());
    assert_eq!(state.item_count(), 0);
}

#[test]
fn arrow_keys_map_to_steps() {
    assert_eq!(arrow_direction("ArrowLeft"), Some(-1));
    assert_eq!(arrow_direction("ArrowRight"), Some(1));
    assert_eq!(arrow_direction("ArrowUp"), None);
    assert_eq!(arrow_direction("a"), None);
}

#[test]
fn viewport_breakpoint_and_device_size() {
    assert!(Viewport::new(1024.0, 768.0, 1.0).is_desktop());
    assert!(!Viewport::new(1023.0, 768.0, 1.0).is_desktop());
    assert_eq!(Viewport::new(1024.0, 768.0, 2.0).device_size(), (2048, 1536));

    let empty = Viewport::new(-5.0, 0.0, 0.0);
    assert_eq!(empty.dpr, 1.0);
    assert_eq!(empty.width, 0.0);
    assert_eq!(empty.device_size(), (1, 1));
}

#[test]
fn breakpoint_watcher_reports_crossings() {
    let mut watcher = BreakpointWatcher::new(768.0, 500.0);
    assert!(!watcher.is_wide());
    assert_eq!(watcher.update(600.0), None);
    assert_eq!(watcher.update(800.0), Some(true));
    assert_eq!(watcher.update(900.0), None);
    assert_eq!(watcher.update(700.0), Some(false));
}

#[test]
fn desktop_to_mobile_rebuild() {
    let desktop = Viewport::new(1280.0, 800.0, 1.0);
    let mobile = Viewport::new(390.0, 844.0, 1.0);
    let mut watcher = BreakpointWatcher::new(DESKTOP_BREAKPOINT, desktop.width);
    let mut compositor = Compositor::default();
    let mut canvas = PixelCanvas::default();
    compositor.resize(desktop, &mut canvas);
    let desktop_dots = compositor.layout().dots.len();

    let mut mapper = ScrollMapper::new(4);
    assert!(mapper.update(0.6).is_some());

    assert_eq!(watcher.update(mobile.width), Some(false));
    compositor.resize(mobile, &mut canvas);
    assert_eq!(
        compositor.layout(),
        &GridLayout::compute(390.0, 844.0, &GridConfig::default())
    );
    assert_ne!(compositor.layout().dots.len(), desktop_dots);
    assert_eq!((canvas.width(), canvas.height()), (390, 844));
    compositor.render(0.5, &mut canvas);

    // The mobile layout has no pinned items yet.
    mapper.reset(0);
    assert_eq!(mapper.current_index(), BEFORE_START);
    assert!(mapper.update(0.5).is_none());
    assert_eq!(mapper.current_index(), BEFORE_START);

    mapper.reset(3);
    let update = mapper.update(0.0).expect("items present");
    assert_eq!(update.index_change.map(|c| c.current), Some(0));
}
