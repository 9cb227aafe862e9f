// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactus_gesture --heading-base-level=0

//! Tactus Gesture: a state machine from recognized gesture samples to view transforms.
//!
//! This crate consumes the output of an external gesture recognizer, a
//! serial stream of phase-tagged [`GestureSample`]s (pinch, pan, tap,
//! double-tap, press), and maintains a clamped
//! [`ViewTransform`](tactus_view::ViewTransform) for a content container
//! inside a fixed view. It focuses on:
//! - Per-kind handlers with start/move/end protocols and base snapshots.
//! - Debounce timers: a shared settle window after pinch/pan ends, and the
//!   tap window that lets a double-tap supersede a single tap.
//! - Clamping after every mutation via `tactus_view`.
//!
//! It does **not** recognize gestures from raw touches, and it does not own
//! a rendering backend. Callers are expected to:
//! - Wire a recognizer's output into [`GestureController::handle`] in arrival
//!   order.
//! - Drive deferred timer callbacks with [`GestureController::tick`].
//! - Read [`GestureController::transform`] snapshots and apply them to a
//!   surface (for example via `tactus_surface`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use tactus_gesture::{GestureController, GestureKinds, GesturePhase, GestureSample};
//! use tactus_view::Extents;
//!
//! let extents = Extents::new(Size::new(300.0, 200.0), Size::new(100.0, 100.0));
//! let mut gestures = GestureController::new(extents);
//! gestures.enable(GestureKinds::PINCH | GestureKinds::PAN);
//!
//! // Pinch out to 1.5x.
//! gestures.handle(&GestureSample::pinch(GesturePhase::Start, 0, 1.0));
//! gestures.handle(&GestureSample::pinch(GesturePhase::Move, 16, 1.5));
//! gestures.handle(&GestureSample::pinch(GesturePhase::End, 32, 1.5));
//!
//! assert_eq!(gestures.transform().scale, 1.5);
//! ```
//!
//! ## Timing model
//!
//! There is no OS timer anywhere in this crate. Samples carry a host-supplied
//! monotonic millisecond timestamp, deadlines are stored as plain numbers in
//! a [`TimerQueue`], and the host's event loop calls
//! [`GestureController::tick`] between samples to fire whatever has come due.
//! Arming a timer that is already pending replaces the previous deadline, so
//! overlapping fires cannot happen.
//!
//! ## Concurrency
//!
//! The controller is single-owner by construction: every entry point takes
//! `&mut self`, and samples are processed strictly in call order. Embedding
//! it in a multithreaded host means giving it a single owning task or an
//! explicit lock; nothing in this crate synchronizes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod handlers;
mod sample;
mod timing;

pub use controller::{GestureConfig, GestureController};
pub use handlers::{
    DoubleTapHandler, GestureHandler, HandlerCx, PanHandler, PinchHandler, PressHandler,
    TapHandler,
};
pub use sample::{GestureKind, GestureKinds, GesturePhase, GestureSample};
pub use timing::{TimerId, TimerQueue};
