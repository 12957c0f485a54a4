use super::*;
use crate::clock::TimeSource;
use crate::foundation::core::{DisplayMode, SurfaceBounds, Visibility};
use crate::style::config::FaceConfig;
use crate::surface::RecordingSurface;

#[derive(Default)]
struct TestHost {
    redraws: u32,
    subscribes: u32,
    unsubscribes: u32,
}

impl EngineHost for TestHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn subscribe_time_updates(&mut self) {
        self.subscribes += 1;
    }

    fn unsubscribe_time_updates(&mut self) {
        self.unsubscribes += 1;
    }
}

struct FixedClock(crate::clock::WallTime);

impl TimeSource for FixedClock {
    fn now(&self) -> crate::clock::WallTime {
        self.0
    }
}

fn test_engine() -> WatchFaceEngine {
    let bounds = SurfaceBounds::new(64, 64).unwrap();
    let clock = FixedClock(crate::clock::WallTime::new(3, 15, 30, 500).unwrap());
    WatchFaceEngine::create(&FaceConfig::default(), None, bounds, Box::new(clock)).unwrap()
}

#[test]
fn initial_state() {
    let state = ModeState::new();
    assert_eq!(state.mode(), DisplayMode::Interactive);
    assert_eq!(state.visibility(), Visibility::Hidden);
    assert!(!state.is_subscribed());
    assert!(!state.low_fidelity_forced());
    assert!(!state.is_animating());
}

#[test]
fn visibility_transitions_manage_the_subscription_idempotently() {
    let mut state = ModeState::new();

    let t = state.set_visibility(Visibility::Visible);
    assert!(t.changed);
    assert_eq!(t.subscription, Some(SubscriptionChange::Subscribe));
    assert!(state.is_subscribed());

    // Re-sent identical event: no transition, no second subscription.
    let t = state.set_visibility(Visibility::Visible);
    assert!(!t.changed);
    assert_eq!(t.subscription, None);
    assert!(state.is_subscribed());

    let t = state.set_visibility(Visibility::Hidden);
    assert!(t.changed);
    assert_eq!(t.subscription, Some(SubscriptionChange::Unsubscribe));
    assert!(!state.is_subscribed());

    let t = state.set_visibility(Visibility::Hidden);
    assert!(!t.changed);
    assert_eq!(t.subscription, None);
}

#[test]
fn animation_runs_only_when_visible_and_interactive() {
    let mut state = ModeState::new();

    state.set_visibility(Visibility::Visible);
    assert!(state.is_animating());

    state.set_mode(DisplayMode::Ambient);
    assert!(!state.is_animating());

    state.set_visibility(Visibility::Hidden);
    assert!(!state.is_animating());

    state.set_mode(DisplayMode::Interactive);
    assert!(!state.is_animating());
}

#[test]
fn low_bit_devices_force_low_fidelity_only_in_ambient() {
    let mut state = ModeState::new();
    state.set_low_bit_ambient(true);
    assert!(!state.low_fidelity_forced());

    state.set_mode(DisplayMode::Ambient);
    assert!(state.low_fidelity_forced());

    state.set_mode(DisplayMode::Interactive);
    assert!(!state.low_fidelity_forced());

    // Without the capability flag ambient stays full fidelity.
    state.set_low_bit_ambient(false);
    state.set_mode(DisplayMode::Ambient);
    assert!(!state.low_fidelity_forced());
}

#[test]
fn low_bit_flag_applies_while_already_ambient() {
    let mut state = ModeState::new();
    state.set_mode(DisplayMode::Ambient);
    state.set_low_bit_ambient(true);
    assert!(state.low_fidelity_forced());
}

#[test]
fn transitions_request_exactly_one_redraw() {
    let mut engine = test_engine();
    let mut host = TestHost::default();

    engine.on_visibility_changed(true, &mut host);
    assert_eq!(host.redraws, 1);
    assert_eq!(host.subscribes, 1);

    // Redundant event: no transition, nothing fires.
    engine.on_visibility_changed(true, &mut host);
    assert_eq!(host.redraws, 1);
    assert_eq!(host.subscribes, 1);

    engine.on_ambient_mode_changed(true, &mut host);
    assert_eq!(host.redraws, 2);

    engine.on_ambient_mode_changed(true, &mut host);
    assert_eq!(host.redraws, 2);

    engine.on_visibility_changed(false, &mut host);
    assert_eq!(host.redraws, 3);
    assert_eq!(host.unsubscribes, 1);
}

#[test]
fn time_events_force_a_redraw() {
    let mut engine = test_engine();
    let mut host = TestHost::default();

    engine.on_time_changed(&mut host);
    assert_eq!(host.redraws, 1);

    engine.on_time_tick(&mut host);
    assert_eq!(host.redraws, 2);
}

#[test]
fn draw_schedules_continuation_only_while_animating() {
    let bounds = SurfaceBounds::new(64, 64).unwrap();
    let mut engine = test_engine();
    let mut host = TestHost::default();
    let mut surface = RecordingSurface::new();

    // Hidden: frame completes, no continuation.
    engine.on_draw(&mut surface, bounds, &mut host);
    assert_eq!(host.redraws, 0);

    engine.on_visibility_changed(true, &mut host);
    let after_transition = host.redraws;

    engine.on_draw(&mut surface, bounds, &mut host);
    assert_eq!(host.redraws, after_transition + 1);
    assert_eq!(engine.scheduler().frames_scheduled(), 1);

    engine.on_ambient_mode_changed(true, &mut host);
    let after_transition = host.redraws;
    engine.on_draw(&mut surface, bounds, &mut host);
    assert_eq!(host.redraws, after_transition);
}
