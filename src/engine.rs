//! The engine object and its mode/visibility state machine.
//!
//! [`WatchFaceEngine`] is the single concrete object behind the face's
//! capability set: create, draw, and the mode/visibility/property/time event
//! hooks the host calls. All state lives in [`ModeState`] and is only ever
//! touched from the host's render-callback thread.

use std::path::Path;

use crate::assets::ornaments::OrnamentSet;
use crate::clock::{TimeSource, compute_angles};
use crate::foundation::core::{DisplayMode, SurfaceBounds, Visibility};
use crate::foundation::error::SprocketResult;
use crate::scene::composer::SceneComposer;
use crate::scheduler::RedrawScheduler;
use crate::style::config::FaceConfig;
use crate::style::registry::StyleSet;
use crate::surface::DrawSurface;

/// Host services the engine calls back into.
///
/// `request_redraw` schedules one frame (immediate or next-vsync is the
/// host's choice). The subscribe/unsubscribe pair manages the host's
/// time-zone/clock-change notification; the engine guarantees it never calls
/// them redundantly.
pub trait EngineHost {
    /// Schedule one redraw.
    fn request_redraw(&mut self);
    /// Start delivering time-zone/clock-change notifications.
    fn subscribe_time_updates(&mut self);
    /// Stop delivering time-zone/clock-change notifications.
    fn unsubscribe_time_updates(&mut self);
}

/// Subscription side effect of a visibility transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionChange {
    /// The host should start delivering time-update notifications.
    Subscribe,
    /// The host should stop delivering time-update notifications.
    Unsubscribe,
}

/// Outcome of feeding one event into the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Whether the event actually changed state. A redraw is requested only
    /// for genuine transitions; a re-sent identical event is a no-op.
    pub changed: bool,
    /// Required subscription side effect, if any.
    pub subscription: Option<SubscriptionChange>,
}

/// The 2×2 mode/visibility state plus the device capability flags.
///
/// The subscription guard is explicit state here rather than an ad hoc
/// boolean next to the receiver: subscribing while subscribed (or
/// unsubscribing while not) yields no side effect, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeState {
    mode: DisplayMode,
    visibility: Visibility,
    low_bit_ambient: bool,
    low_fidelity_forced: bool,
    subscribed: bool,
}

impl ModeState {
    /// Initial state: interactive, hidden, no capability flags, unsubscribed.
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::Interactive,
            visibility: Visibility::Hidden,
            low_bit_ambient: false,
            low_fidelity_forced: false,
            subscribed: false,
        }
    }

    /// Current display mode.
    pub fn mode(self) -> DisplayMode {
        self.mode
    }

    /// Current visibility.
    pub fn visibility(self) -> Visibility {
        self.visibility
    }

    /// Whether anti-aliasing is force-disabled for rendering.
    pub fn low_fidelity_forced(self) -> bool {
        self.low_fidelity_forced
    }

    /// Whether the time-update subscription is active.
    pub fn is_subscribed(self) -> bool {
        self.subscribed
    }

    /// Whether continuous animation should run (`Visible ∧ Interactive`).
    pub fn is_animating(self) -> bool {
        RedrawScheduler::should_continue(self.mode, self.visibility)
    }

    /// Apply a visibility event.
    ///
    /// Entry into Visible subscribes to time updates (the time zone may have
    /// changed while hidden); entry into Hidden unsubscribes. Both are
    /// idempotent.
    pub fn set_visibility(&mut self, visibility: Visibility) -> Transition {
        let subscription = match (visibility.is_visible(), self.subscribed) {
            (true, false) => {
                self.subscribed = true;
                Some(SubscriptionChange::Subscribe)
            }
            (false, true) => {
                self.subscribed = false;
                Some(SubscriptionChange::Unsubscribe)
            }
            _ => None,
        };
        let changed = self.visibility != visibility;
        self.visibility = visibility;
        Transition {
            changed,
            subscription,
        }
    }

    /// Apply an ambient-mode event, recomputing the forced-low-fidelity flag.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Transition {
        let changed = self.mode != mode;
        self.mode = mode;
        self.low_fidelity_forced = self.low_bit_ambient && !mode.is_interactive();
        Transition {
            changed,
            subscription: None,
        }
    }

    /// Apply the device's low-bit-ambient capability flag.
    pub fn set_low_bit_ambient(&mut self, low_bit_ambient: bool) {
        self.low_bit_ambient = low_bit_ambient;
        self.low_fidelity_forced = low_bit_ambient && !self.mode.is_interactive();
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

/// The concrete scene engine.
///
/// Construction front-loads all IO (ornament decode/scale) and is the only
/// fallible step; every event hook and the draw path are infallible and
/// bounded.
pub struct WatchFaceEngine {
    composer: SceneComposer,
    clock: Box<dyn TimeSource>,
    scheduler: RedrawScheduler,
    state: ModeState,
}

impl WatchFaceEngine {
    /// Build the engine: validate styles, then load, decode, and scale the
    /// ornaments for a face of `bounds`.
    ///
    /// A missing or undecodable ornament fails construction loudly; there is
    /// no partially initialized engine.
    #[tracing::instrument(skip(config, clock))]
    pub fn create(
        config: &FaceConfig,
        assets_root: Option<&Path>,
        bounds: SurfaceBounds,
        clock: Box<dyn TimeSource>,
    ) -> SprocketResult<Self> {
        let styles = StyleSet::from_config(&config.style)?;
        let ornaments = OrnamentSet::load(&config.ornaments, assets_root, bounds)?;
        Ok(Self {
            composer: SceneComposer::new(styles, ornaments),
            clock,
            scheduler: RedrawScheduler::new(),
            state: ModeState::new(),
        })
    }

    /// Current state snapshot.
    pub fn state(&self) -> ModeState {
        self.state
    }

    /// The composer (styles + ornaments) in use.
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// The redraw scheduler (diagnostics).
    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    /// Host hook: visibility changed.
    pub fn on_visibility_changed(&mut self, visible: bool, host: &mut dyn EngineHost) {
        let transition = self.state.set_visibility(Visibility::from_bool(visible));
        self.apply(transition, host);
        if transition.changed {
            tracing::debug!(visible, "visibility changed");
        }
    }

    /// Host hook: ambient mode changed.
    pub fn on_ambient_mode_changed(&mut self, ambient: bool, host: &mut dyn EngineHost) {
        let transition = self.state.set_mode(DisplayMode::from_ambient_flag(ambient));
        self.apply(transition, host);
        if transition.changed {
            tracing::debug!(ambient, low_fidelity = self.state.low_fidelity_forced(), "display mode changed");
        }
    }

    /// Host hook: device properties delivered (low-bit-ambient capability).
    pub fn on_properties_changed(&mut self, low_bit_ambient: bool) {
        self.state.set_low_bit_ambient(low_bit_ambient);
    }

    /// Host hook: coarse periodic tick (e.g. once per minute in ambient).
    pub fn on_time_tick(&mut self, host: &mut dyn EngineHost) {
        host.request_redraw();
    }

    /// Host hook: the time zone or wall clock jumped; redraw with the new
    /// time.
    pub fn on_time_changed(&mut self, host: &mut dyn EngineHost) {
        host.request_redraw();
    }

    /// Host hook: produce one frame on `surface`, then let the scheduler
    /// decide whether to request the next.
    ///
    /// The clock is sampled exactly once; all hand angles of the frame derive
    /// from that single snapshot.
    pub fn on_draw(
        &mut self,
        surface: &mut dyn DrawSurface,
        bounds: SurfaceBounds,
        host: &mut dyn EngineHost,
    ) {
        let snapshot = self.clock.now();
        let angles = compute_angles(snapshot);
        self.composer.render(
            surface,
            bounds,
            &angles,
            self.state.mode(),
            self.state.low_fidelity_forced(),
        );
        self.scheduler
            .frame_completed(self.state.mode(), self.state.visibility(), host);
    }

    /// Every genuine transition triggers exactly one immediate redraw,
    /// regardless of the animation-running decision.
    fn apply(&mut self, transition: Transition, host: &mut dyn EngineHost) {
        match transition.subscription {
            Some(SubscriptionChange::Subscribe) => host.subscribe_time_updates(),
            Some(SubscriptionChange::Unsubscribe) => host.unsubscribe_time_updates(),
            None => {}
        }
        if transition.changed {
            host.request_redraw();
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
