// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind gesture handlers.
//!
//! Each handler owns the start-snapshot state for one gesture kind and
//! mutates the shared [`ViewTransform`] through a [`HandlerCx`]; it never
//! sees samples of other kinds. The controller clamps the transform after
//! any mutation, so handlers write raw values.

use kurbo::Vec2;
use tactus_view::ViewTransform;

use crate::controller::GestureConfig;
use crate::sample::{GestureKind, GesturePhase, GestureSample};
use crate::timing::{TimerId, TimerQueue};

/// Everything a handler may touch while processing one sample.
#[derive(Debug)]
pub struct HandlerCx<'a> {
    /// Transform mutated in place; the controller clamps it afterwards.
    pub transform: &'a mut ViewTransform,
    /// Timer slots shared by all handlers.
    pub timers: &'a mut TimerQueue,
    /// Durations and scale limits.
    pub config: &'a GestureConfig,
}

/// A handler for one gesture kind.
///
/// Returning `true` reports that the transform was mutated and needs
/// clamping and a re-render; gated or stateless samples return `false`.
pub trait GestureHandler {
    /// The sample kind this handler consumes.
    fn kind(&self) -> GestureKind;

    /// Processes one sample of this handler's kind.
    fn handle(&mut self, sample: &GestureSample, cx: HandlerCx<'_>) -> bool;
}

/// Pinch-to-zoom: scales relative to the value captured at gesture start.
///
/// Inert while the settle window is pending. A start sample dropped by that
/// gate leaves the previous base in place, so a gesture that straddles the
/// window continues from the old baseline once the window elapses.
#[derive(Clone, Copy, Debug)]
pub struct PinchHandler {
    base_scale: f64,
}

impl Default for PinchHandler {
    fn default() -> Self {
        Self { base_scale: 1.0 }
    }
}

impl GestureHandler for PinchHandler {
    fn kind(&self) -> GestureKind {
        GestureKind::Pinch
    }

    fn handle(&mut self, sample: &GestureSample, cx: HandlerCx<'_>) -> bool {
        if cx.timers.is_pending(TimerId::Settle, sample.time) {
            return false;
        }
        if sample.phase == GesturePhase::Start {
            let current = cx.transform.scale;
            self.base_scale = if current.is_finite() && current > 0.0 {
                current
            } else {
                1.0
            };
        }
        cx.transform.scale = self.base_scale * sample.scale_factor;
        if sample.phase == GesturePhase::End {
            cx.transform.scale = cx
                .transform
                .scale
                .max(cx.config.min_scale)
                .min(cx.config.max_scale);
            cx.timers.arm(TimerId::Settle, sample.time, cx.config.settle_ms);
        }
        true
    }
}

/// Pan: translates relative to the offset captured at gesture start.
///
/// Inert while the view is unscaled or the settle window is pending; panning
/// a non-zoomed view is disallowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanHandler {
    base_offset: Vec2,
}

impl GestureHandler for PanHandler {
    fn kind(&self) -> GestureKind {
        GestureKind::Pan
    }

    fn handle(&mut self, sample: &GestureSample, cx: HandlerCx<'_>) -> bool {
        if cx.transform.scale == 1.0 || cx.timers.is_pending(TimerId::Settle, sample.time) {
            return false;
        }
        if sample.phase == GesturePhase::Start {
            self.base_offset = cx.transform.offset;
        }
        cx.transform.offset = self.base_offset + sample.delta;
        if sample.phase == GesturePhase::End {
            cx.timers.arm(TimerId::Settle, sample.time, cx.config.settle_ms);
        }
        true
    }
}

/// Single tap: defers the registered tap callback by one tap window so a
/// double-tap can supersede it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapHandler;

impl GestureHandler for TapHandler {
    fn kind(&self) -> GestureKind {
        GestureKind::Tap
    }

    fn handle(&mut self, sample: &GestureSample, cx: HandlerCx<'_>) -> bool {
        cx.timers
            .arm(TimerId::TapWindow, sample.time, cx.config.tap_window_ms);
        false
    }
}

/// Double tap: cancels a pending single tap and toggles between the rest
/// scale and the configured maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTapHandler;

impl GestureHandler for DoubleTapHandler {
    fn kind(&self) -> GestureKind {
        GestureKind::DoubleTap
    }

    fn handle(&mut self, _sample: &GestureSample, cx: HandlerCx<'_>) -> bool {
        cx.timers.clear(TimerId::TapWindow);
        cx.transform.scale = if cx.transform.scale != 1.0 {
            1.0
        } else {
            cx.config.max_scale
        };
        true
    }
}

/// Press: recognized but currently has no effect on the transform.
// TODO: route presses to a registered callback once the registration surface
// grows beyond tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressHandler;

impl GestureHandler for PressHandler {
    fn kind(&self) -> GestureKind {
        GestureKind::Press
    }

    fn handle(&mut self, _sample: &GestureSample, _cx: HandlerCx<'_>) -> bool {
        false
    }
}
