// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Vec2;

/// Kind of a recognized gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Two-finger pinch, scaling the view.
    Pinch,
    /// One-finger pan, translating a zoomed view.
    Pan,
    /// Single tap.
    Tap,
    /// Double tap.
    DoubleTap,
    /// Long press.
    Press,
}

/// Phase of a gesture within its start → move → end protocol.
///
/// Instantaneous gestures (tap, double-tap, press) are delivered as a single
/// [`GesturePhase::End`] sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// First sample of a continuous gesture.
    Start,
    /// Intermediate sample of a continuous gesture.
    Move,
    /// Final (or only) sample of a gesture.
    End,
}

bitflags! {
    /// A set of gesture kinds, used to pick which gestures a controller
    /// reacts to.
    ///
    /// Set semantics make enabling idempotent: enabling a kind twice is the
    /// same as enabling it once, and bits outside the known kinds are simply
    /// dropped.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct GestureKinds: u8 {
        /// React to pinch samples.
        const PINCH = 1 << 0;
        /// React to pan samples.
        const PAN = 1 << 1;
        /// React to tap samples.
        const TAP = 1 << 2;
        /// React to double-tap samples.
        const DOUBLE_TAP = 1 << 3;
        /// React to press samples.
        const PRESS = 1 << 4;
    }
}

impl From<GestureKind> for GestureKinds {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::Pinch => Self::PINCH,
            GestureKind::Pan => Self::PAN,
            GestureKind::Tap => Self::TAP,
            GestureKind::DoubleTap => Self::DOUBLE_TAP,
            GestureKind::Press => Self::PRESS,
        }
    }
}

/// One recognized gesture sample, as produced by an external recognizer.
///
/// Samples are transient: the controller consumes each one exactly once, in
/// arrival order. `time` is a host-supplied monotonic timestamp in
/// milliseconds; it both orders the stream and drives the debounce timers.
///
/// Fields that a kind does not use keep their neutral values (`scale_factor`
/// of 1, zero `delta`), mirroring recognizers that report every field on
/// every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Which gesture produced this sample.
    pub kind: GestureKind,
    /// Where in the start → move → end protocol this sample falls.
    pub phase: GesturePhase,
    /// Monotonic timestamp in milliseconds.
    pub time: u64,
    /// Scale relative to the gesture start; meaningful for pinch.
    pub scale_factor: f64,
    /// Translation relative to the gesture start, in view pixels; meaningful
    /// for pan.
    pub delta: Vec2,
}

impl GestureSample {
    /// Creates a sample with neutral payload fields.
    #[must_use]
    pub fn new(kind: GestureKind, phase: GesturePhase, time: u64) -> Self {
        Self {
            kind,
            phase,
            time,
            scale_factor: 1.0,
            delta: Vec2::ZERO,
        }
    }

    /// A pinch sample carrying the scale relative to the gesture start.
    #[must_use]
    pub fn pinch(phase: GesturePhase, time: u64, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            ..Self::new(GestureKind::Pinch, phase, time)
        }
    }

    /// A pan sample carrying the translation relative to the gesture start.
    #[must_use]
    pub fn pan(phase: GesturePhase, time: u64, delta: Vec2) -> Self {
        Self {
            delta,
            ..Self::new(GestureKind::Pan, phase, time)
        }
    }

    /// A recognized single tap.
    #[must_use]
    pub fn tap(time: u64) -> Self {
        Self::new(GestureKind::Tap, GesturePhase::End, time)
    }

    /// A recognized double tap.
    #[must_use]
    pub fn double_tap(time: u64) -> Self {
        Self::new(GestureKind::DoubleTap, GesturePhase::End, time)
    }

    /// A recognized press.
    #[must_use]
    pub fn press(time: u64) -> Self {
        Self::new(GestureKind::Press, GesturePhase::End, time)
    }
}
