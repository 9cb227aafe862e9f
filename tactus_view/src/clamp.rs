// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::transform::{Extents, ViewTransform};

/// Normalizes `transform` so the content never leaves the visible bounds.
///
/// Recomputes the origin from the scaled content and view sizes, then pulls
/// the offset back inside `[-origin, origin]` per axis. When the scaled
/// content is smaller than the view on an axis, the offset on that axis is
/// forced to center the content instead.
///
/// The origin is the half excess of the scaled content over the view:
/// `(content * scale - view) / 2` per axis, pinned to zero when
/// `scale == 1`. Degenerate (non-finite) candidates are treated as zero so
/// a zero-sized or unmeasured surface never produces NaN offsets.
///
/// Idempotent: `clamp(clamp(s)) == clamp(s)` for any reachable state.
pub fn clamp(transform: &mut ViewTransform, extents: &Extents) {
    let scaled = extents.scaled_content(transform.scale);

    transform.origin = if transform.scale == 1.0 {
        Point::ZERO
    } else {
        Point::new(
            half_excess(scaled.width, extents.view.width),
            half_excess(scaled.height, extents.view.height),
        )
    };

    // The bounds invert when the scaled content is smaller than the view
    // (negative origin); the centering override below owns that case, so
    // max-then-min rather than `f64::clamp`.
    let ox = transform.origin.x;
    let oy = transform.origin.y;
    transform.offset.x = transform.offset.x.max(-ox).min(ox);
    transform.offset.y = transform.offset.y.max(-oy).min(oy);

    if scaled.width < extents.view.width {
        transform.offset.x = (extents.view.width - scaled.width) / 2.0;
    }
    if scaled.height < extents.view.height {
        transform.offset.y = (extents.view.height - scaled.height) / 2.0;
    }
}

/// Returns a normalized copy of `transform`. See [`clamp`].
#[must_use]
pub fn clamped(transform: ViewTransform, extents: &Extents) -> ViewTransform {
    let mut out = transform;
    clamp(&mut out, extents);
    out
}

fn half_excess(scaled: f64, view: f64) -> f64 {
    let half = (scaled - view) / 2.0;
    if half.is_finite() { half } else { 0.0 }
}
