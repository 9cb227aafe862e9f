// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use tactus_gesture::{GestureConfig, GestureController, GestureKinds, GestureSample};
use tactus_view::{Extents, ViewTransform};

use crate::css::{CssTransform, encode};

/// Rendering-surface side of the collaborator boundary.
///
/// The extents are measured exactly once, at attach time; re-measurement on
/// resize is out of scope for a session.
pub trait Surface {
    /// Size of the raw content element whose transform is mutated.
    fn content_extent(&self) -> Size;

    /// Size of the visible window the content moves within.
    fn view_extent(&self) -> Size;

    /// Applies an encoded transform to the rendering surface.
    fn apply(&mut self, css: &CssTransform);
}

/// An ordered stream of recognized gesture samples.
///
/// Implemented by the recognizer side of the host; `None` means no sample is
/// currently available, not that the stream ended.
pub trait SampleSource {
    /// The next recognized sample, if any.
    fn next_sample(&mut self) -> Option<GestureSample>;
}

/// A gesture-driven view: a [`GestureController`] bound to a [`Surface`].
///
/// `GestureView` is the attach wiring. It measures the surface once, routes
/// recognized samples through the controller, and pushes the re-encoded
/// transform back to the surface whenever it changes.
#[derive(Debug)]
pub struct GestureView<S: Surface> {
    controller: GestureController,
    surface: S,
}

impl<S: Surface> GestureView<S> {
    /// Attaches to `surface`, measuring both extents, with the default
    /// configuration.
    #[must_use]
    pub fn attach(surface: S) -> Self {
        Self::attach_with_config(surface, GestureConfig::default())
    }

    /// Attaches to `surface` with an explicit configuration.
    #[must_use]
    pub fn attach_with_config(surface: S, config: GestureConfig) -> Self {
        let extents = Extents::new(surface.content_extent(), surface.view_extent());
        Self {
            controller: GestureController::with_config(extents, config),
            surface,
        }
    }

    /// Enables the given gesture kinds. See
    /// [`GestureController::enable`].
    pub fn enable(&mut self, kinds: GestureKinds) {
        self.controller.enable(kinds);
    }

    /// Registers the tap callback; the last registration wins.
    pub fn on_tap(&mut self, callback: impl FnMut() + 'static) {
        self.controller.on_tap(callback);
    }

    /// Delivers one recognized sample, applying the encoded transform to the
    /// surface when it changed.
    pub fn deliver(&mut self, sample: &GestureSample) {
        if self.controller.handle(sample) {
            let css = encode(&self.controller.transform());
            self.surface.apply(&css);
        }
    }

    /// Drains `source`, delivering each sample in arrival order.
    pub fn pump(&mut self, source: &mut impl SampleSource) {
        while let Some(sample) = source.next_sample() {
            self.deliver(&sample);
        }
    }

    /// Fires timers due at `now`. See [`GestureController::tick`].
    pub fn tick(&mut self, now: u64) {
        self.controller.tick(now);
    }

    /// A snapshot of the current clamped transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    /// The bound surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the bound surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Releases the controller. Idempotent; afterwards samples and ticks are
    /// inert and nothing further is applied to the surface.
    pub fn destroy(&mut self) {
        self.controller.detach();
    }

    /// Returns `true` once [`GestureView::destroy`] has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.controller.is_detached()
    }
}
