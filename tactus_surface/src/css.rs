// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use tactus_view::ViewTransform;

/// CSS-shaped rendering of a [`ViewTransform`].
///
/// `transform` is a `scale(S) translate(Xpx, Ypx)` value and `origin` a
/// `transform-origin` value of `OXpx OYpx`. Because scale is applied before
/// translate, the translation is expressed in pre-scale units (the offset
/// divided by the scale) so the on-screen movement matches the offset in
/// view pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssTransform {
    /// The `transform` property value.
    pub transform: String,
    /// The `transform-origin` property value.
    pub origin: String,
}

/// Encodes `transform` for application to a CSS-positioned container.
///
/// Hosts applying this should also reset any static `top`/`left` offsets on
/// the container; the whole placement is carried by the transform.
#[must_use]
pub fn encode(transform: &ViewTransform) -> CssTransform {
    let scale = transform.scale;
    let x = transform.offset.x / scale;
    let y = transform.offset.y / scale;
    CssTransform {
        transform: format!("scale({scale}) translate({x}px, {y}px)"),
        origin: format!("{}px {}px", transform.origin.x, transform.origin.y),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use tactus_view::ViewTransform;

    use super::encode;

    #[test]
    fn identity_encodes_to_zeroes() {
        let css = encode(&ViewTransform::IDENTITY);
        assert_eq!(css.transform, "scale(1) translate(0px, 0px)");
        assert_eq!(css.origin, "0px 0px");
    }

    #[test]
    fn translation_is_divided_by_scale() {
        let t = ViewTransform {
            scale: 2.0,
            offset: Vec2::new(250.0, -150.0),
            origin: Point::new(250.0, 150.0),
        };
        let css = encode(&t);
        assert_eq!(css.transform, "scale(2) translate(125px, -75px)");
        assert_eq!(css.origin, "250px 150px");
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let t = ViewTransform {
            scale: 1.5,
            offset: Vec2::new(30.0, 0.0),
            origin: Point::new(125.0, 50.0),
        };
        let css = encode(&t);
        assert_eq!(css.transform, "scale(1.5) translate(20px, 0px)");
    }
}
