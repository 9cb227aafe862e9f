// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactus_view --heading-base-level=0

//! Tactus View: bounded view transform primitives.
//!
//! This crate provides the small, headless model of a pan/zoom transform for a
//! content container moving inside a fixed view window. It focuses on:
//! - Transform state: a uniform scale, a translation offset, and the derived
//!   transform origin.
//! - Clamping: normalizing the offset and origin after every mutation so the
//!   content never leaves the visible bounds.
//!
//! It does **not** own any gesture recognition or rendering backend. Callers
//! (typically `tactus_gesture`) mutate a [`ViewTransform`] and run [`clamp`]
//! afterwards; adapters read `Copy` snapshots and apply them to a surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use tactus_view::{Extents, ViewTransform, clamp};
//!
//! // 300x200 content shown through a 100x100 window.
//! let extents = Extents::new(Size::new(300.0, 200.0), Size::new(100.0, 100.0));
//!
//! let mut transform = ViewTransform::IDENTITY;
//! transform.scale = 2.0;
//! transform.offset = Vec2::new(1000.0, 0.0);
//!
//! clamp(&mut transform, &extents);
//!
//! // The offset is pulled back to the clamp boundary derived from the
//! // scaled content size, and the origin is recomputed.
//! assert_eq!(transform.origin.x, 250.0);
//! assert_eq!(transform.offset.x, 250.0);
//! ```
//!
//! ## Design notes
//!
//! - The transform is uniform: one scale factor for both axes.
//! - `scale == 1` is the rest state; its origin is pinned to zero so an
//!   unscaled view renders exactly where it was attached.
//! - Clamping is idempotent: normalizing an already-normalized state changes
//!   nothing. Callers may re-run it freely after any mutation.
//! - When the scaled content is smaller than the view on an axis, the offset
//!   on that axis is centered instead of clamped.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod transform;

pub use clamp::{clamp, clamped};
pub use transform::{Extents, ViewTransform};
