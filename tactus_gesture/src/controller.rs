// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tactus_view::{Extents, ViewTransform, clamp};

use crate::handlers::{
    DoubleTapHandler, GestureHandler, HandlerCx, PanHandler, PinchHandler, PressHandler,
    TapHandler,
};
use crate::sample::{GestureKind, GestureKinds, GestureSample};
use crate::timing::{TimerId, TimerQueue};

/// Durations and scale limits for the gesture state machine.
///
/// The defaults reproduce the stock behavior: a 100 ms settle window after
/// pinch/pan ends, a 300 ms tap window, and a rest scale range of `[1, 2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Debounce window armed when a pinch or pan ends, in milliseconds.
    pub settle_ms: u64,
    /// How long a recognized tap waits for a superseding double-tap, in
    /// milliseconds.
    pub tap_window_ms: u64,
    /// Scale floor applied when a pinch ends.
    pub min_scale: f64,
    /// Scale ceiling applied when a pinch ends; also the double-tap zoom
    /// target.
    pub max_scale: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            tap_window_ms: 300,
            min_scale: 1.0,
            max_scale: 2.0,
        }
    }
}

impl GestureConfig {
    /// Normalizes the scale range so that `min_scale <= max_scale`.
    fn normalized(mut self) -> Self {
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        self
    }
}

/// The gesture state machine: owns the view transform and feeds it from a
/// serial stream of recognized samples.
///
/// One controller serves one attached view for its whole session. Gesture
/// kinds are opt-in via [`GestureController::enable`]; samples for kinds
/// that were never enabled are inert. All entry points take `&mut self`;
/// the single serial sample stream is the concurrency model.
pub struct GestureController {
    transform: ViewTransform,
    extents: Extents,
    config: GestureConfig,
    timers: TimerQueue,
    enabled: GestureKinds,
    handlers: Vec<Box<dyn GestureHandler>>,
    on_tap: Option<Box<dyn FnMut()>>,
    detached: bool,
}

impl GestureController {
    /// Creates a controller for a view with the given extents and default
    /// configuration. The transform starts at rest.
    #[must_use]
    pub fn new(extents: Extents) -> Self {
        Self::with_config(extents, GestureConfig::default())
    }

    /// Creates a controller with an explicit configuration.
    #[must_use]
    pub fn with_config(extents: Extents, config: GestureConfig) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            extents,
            config: config.normalized(),
            timers: TimerQueue::default(),
            enabled: GestureKinds::empty(),
            handlers: Vec::new(),
            on_tap: None,
            detached: false,
        }
    }

    /// Enables the given gesture kinds.
    ///
    /// Accepts a single kind or any union of kinds; already-enabled kinds are
    /// skipped, so repeated calls never duplicate handlers. Detached
    /// controllers ignore this.
    pub fn enable(&mut self, kinds: GestureKinds) {
        if self.detached {
            return;
        }
        for kind in [
            GestureKind::Pinch,
            GestureKind::Pan,
            GestureKind::Tap,
            GestureKind::DoubleTap,
            GestureKind::Press,
        ] {
            let flag = GestureKinds::from(kind);
            if kinds.contains(flag) && !self.enabled.contains(flag) {
                self.enabled |= flag;
                self.handlers.push(make_handler(kind));
            }
        }
    }

    /// The currently enabled gesture kinds.
    #[must_use]
    pub fn enabled(&self) -> GestureKinds {
        self.enabled
    }

    /// Registers the tap callback, replacing any previous registration.
    ///
    /// The callback fires from [`GestureController::tick`] (or from the next
    /// sample's timestamp) once a recognized tap's window elapses without a
    /// double-tap superseding it.
    pub fn on_tap(&mut self, callback: impl FnMut() + 'static) {
        self.on_tap = Some(Box::new(callback));
    }

    /// Processes one recognized sample.
    ///
    /// Timers due at the sample's timestamp fire first, then the sample is
    /// dispatched to the matching enabled handler. Returns `true` when the
    /// transform changed and the surface should re-render; the returned
    /// state is already clamped.
    pub fn handle(&mut self, sample: &GestureSample) -> bool {
        if self.detached {
            return false;
        }
        self.run_timers(sample.time);
        let Some(handler) = self
            .handlers
            .iter_mut()
            .find(|handler| handler.kind() == sample.kind)
        else {
            return false;
        };
        let mutated = handler.handle(
            sample,
            HandlerCx {
                transform: &mut self.transform,
                timers: &mut self.timers,
                config: &self.config,
            },
        );
        if mutated {
            clamp(&mut self.transform, &self.extents);
        }
        mutated
    }

    /// Fires timers due at `now`.
    ///
    /// Hosts call this between samples. It is the scheduled-callback
    /// suspension point, and the only place the deferred single-tap callback
    /// can fire from when no further samples arrive.
    pub fn tick(&mut self, now: u64) {
        if self.detached {
            return;
        }
        self.run_timers(now);
    }

    /// A snapshot of the clamped transform, for the surface adapter.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The extents this controller was created with.
    #[must_use]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Tears the controller down: cancels timers, drops handlers and the tap
    /// callback. Idempotent; subsequent samples and ticks are inert.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.timers.clear_all();
        self.handlers.clear();
        self.enabled = GestureKinds::empty();
        self.on_tap = None;
    }

    /// Returns `true` once [`GestureController::detach`] has run.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn run_timers(&mut self, now: u64) {
        let mut tap_due = false;
        self.timers.fire_due(now, |id| {
            if id == TimerId::TapWindow {
                tap_due = true;
            }
        });
        if tap_due {
            if let Some(callback) = self.on_tap.as_mut() {
                callback();
            }
        }
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("transform", &self.transform)
            .field("extents", &self.extents)
            .field("config", &self.config)
            .field("timers", &self.timers)
            .field("enabled", &self.enabled)
            .field("handlers", &self.handlers.len())
            .field("on_tap", &self.on_tap.is_some())
            .field("detached", &self.detached)
            .finish()
    }
}

fn make_handler(kind: GestureKind) -> Box<dyn GestureHandler> {
    match kind {
        GestureKind::Pinch => Box::new(PinchHandler::default()),
        GestureKind::Pan => Box::new(PanHandler::default()),
        GestureKind::Tap => Box::new(TapHandler),
        GestureKind::DoubleTap => Box::new(DoubleTapHandler),
        GestureKind::Press => Box::new(PressHandler),
    }
}
