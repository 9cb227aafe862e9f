// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactus_surface --heading-base-level=0

//! Tactus Surface: the boundary between the gesture core and a rendering host.
//!
//! This crate defines what the headless core needs from its host: a
//! [`Surface`] that can be measured once and can apply an encoded transform,
//! and a [`SampleSource`] delivering recognized gesture samples in temporal
//! order. [`GestureView`] is the attach wiring that binds a surface to a
//! [`GestureController`](tactus_gesture::GestureController).
//!
//! The encoding is CSS-shaped: `scale(S) translate(Xpx, Ypx)` with the
//! translation in pre-scale units and a `transform-origin` value of
//! `OXpx OYpx`. A web host assigns the two strings to the container's style
//! (resetting any static `top`/`left` positioning); other hosts are free to
//! parse or recompute an equivalent transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use tactus_gesture::{GestureKinds, GestureSample};
//! use tactus_surface::{CssTransform, GestureView, Surface};
//!
//! struct Recorder {
//!     applied: Vec<CssTransform>,
//! }
//!
//! impl Surface for Recorder {
//!     fn content_extent(&self) -> Size {
//!         Size::new(300.0, 200.0)
//!     }
//!     fn view_extent(&self) -> Size {
//!         Size::new(100.0, 100.0)
//!     }
//!     fn apply(&mut self, css: &CssTransform) {
//!         self.applied.push(css.clone());
//!     }
//! }
//!
//! let mut view = GestureView::attach(Recorder { applied: Vec::new() });
//! view.enable(GestureKinds::DOUBLE_TAP);
//!
//! view.deliver(&GestureSample::double_tap(0));
//! assert_eq!(view.surface().applied.len(), 1);
//! assert!(view.surface().applied[0].transform.starts_with("scale(2)"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod css;
mod view;

pub use css::{CssTransform, encode};
pub use view::{GestureView, SampleSource, Surface};
