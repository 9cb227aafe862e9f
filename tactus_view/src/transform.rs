// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Pan/zoom state of a content container inside a fixed view.
///
/// `ViewTransform` is a plain `Copy` record. It is owned and mutated by a
/// gesture controller; adapters read snapshots and apply them to a rendering
/// surface as `scale` + `translate` with `origin` as the transform-origin
/// point. After any mutation the state should be normalized with
/// [`clamp`](crate::clamp).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor. `1.0` is the rest state.
    pub scale: f64,
    /// Translation of the scaled content, in view pixels.
    pub offset: Vec2,
    /// Transform origin, derived from the scaled content and view sizes.
    ///
    /// Doubles as the clamp boundary for `offset`: each offset component is
    /// kept within `[-origin, origin]` on its axis.
    pub origin: Point,
}

impl ViewTransform {
    /// The rest state: unscaled, untranslated, origin at the view corner.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
        origin: Point::ZERO,
    };

    /// Resets to [`ViewTransform::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns `true` when the view is at its unscaled rest state.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Content and view sizes, measured once at attach time.
///
/// Re-measurement on resize is out of scope; a session keeps the extents it
/// was attached with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    /// Size of the raw (unscaled) content element.
    pub content: Size,
    /// Size of the visible window the content moves within.
    pub view: Size,
}

impl Extents {
    /// Creates extents from a content size and a view size.
    #[must_use]
    pub fn new(content: Size, view: Size) -> Self {
        Self { content, view }
    }

    /// The content size under the given uniform scale.
    #[must_use]
    pub fn scaled_content(&self, scale: f64) -> Size {
        self.content * scale
    }
}
