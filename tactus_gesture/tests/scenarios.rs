// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios for the `tactus_gesture` crate.
//!
//! These drive a full controller through recognizer-shaped sample streams,
//! with a focus on how the settle and tap-window timers interact with the
//! pinch/pan/tap handlers and the clamped transform.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Size, Vec2};
use tactus_gesture::{GestureController, GestureKinds, GesturePhase, GestureSample};
use tactus_view::Extents;

fn controller() -> GestureController {
    let extents = Extents::new(Size::new(300.0, 200.0), Size::new(100.0, 100.0));
    let mut gestures = GestureController::new(extents);
    gestures.enable(GestureKinds::all());
    gestures
}

fn tap_counter(gestures: &mut GestureController) -> Rc<Cell<u32>> {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    gestures.on_tap(move || counter.set(counter.get() + 1));
    fired
}

#[test]
fn pinch_to_one_and_a_half() {
    let mut gestures = controller();

    gestures.handle(&GestureSample::pinch(GesturePhase::Start, 0, 1.0));
    gestures.handle(&GestureSample::pinch(GesturePhase::Move, 16, 1.5));
    gestures.handle(&GestureSample::pinch(GesturePhase::End, 32, 1.5));

    let transform = gestures.transform();
    assert_eq!(transform.scale, 1.5);
    // Origin recomputed from 300x200 content at 1.5x against the 100x100 view.
    assert_eq!(transform.origin.x, (450.0 - 100.0) / 2.0);
    assert_eq!(transform.origin.y, (300.0 - 100.0) / 2.0);
}

#[test]
fn settle_window_blocks_pinch_and_pan_alike() {
    let mut gestures = controller();

    gestures.handle(&GestureSample::pinch(GesturePhase::Start, 0, 1.0));
    gestures.handle(&GestureSample::pinch(GesturePhase::End, 20, 1.5));
    let settled = gestures.transform();

    // Within 100ms of the pinch end neither gesture mutates anything.
    assert!(!gestures.handle(&GestureSample::pinch(GesturePhase::Start, 60, 2.0)));
    assert!(!gestures.handle(&GestureSample::pan(
        GesturePhase::Start,
        80,
        Vec2::new(10.0, 10.0)
    )));
    assert_eq!(gestures.transform(), settled);

    // Once the window elapses, pan works again on the zoomed view.
    assert!(gestures.handle(&GestureSample::pan(
        GesturePhase::Start,
        140,
        Vec2::ZERO
    )));
    assert!(gestures.handle(&GestureSample::pan(
        GesturePhase::Move,
        156,
        Vec2::new(10.0, 0.0)
    )));
    assert_eq!(gestures.transform().offset.x, 10.0);
}

#[test]
fn pan_end_arms_its_own_settle_window() {
    let mut gestures = controller();
    gestures.handle(&GestureSample::double_tap(0));

    gestures.handle(&GestureSample::pan(GesturePhase::Start, 200, Vec2::ZERO));
    gestures.handle(&GestureSample::pan(
        GesturePhase::End,
        220,
        Vec2::new(5.0, 0.0),
    ));

    // A pinch inside the pan's settle window is dropped.
    assert!(!gestures.handle(&GestureSample::pinch(GesturePhase::Start, 260, 1.0)));
    assert!(gestures.handle(&GestureSample::pinch(GesturePhase::Start, 330, 1.0)));
}

#[test]
fn runaway_pan_is_clamped_to_the_boundary() {
    let mut gestures = controller();
    gestures.handle(&GestureSample::double_tap(0));

    gestures.handle(&GestureSample::pan(GesturePhase::Start, 200, Vec2::ZERO));
    gestures.handle(&GestureSample::pan(
        GesturePhase::Move,
        216,
        Vec2::new(1000.0, 0.0),
    ));

    // +originX for 300x200 content at 2x in a 100x100 view is 250.
    assert_eq!(gestures.transform().offset.x, 250.0);
}

#[test]
fn tap_fires_after_its_window_elapses() {
    let mut gestures = controller();
    let fired = tap_counter(&mut gestures);

    gestures.handle(&GestureSample::tap(1000));
    gestures.tick(1299);
    assert_eq!(fired.get(), 0);

    gestures.tick(1300);
    assert_eq!(fired.get(), 1);

    // The window is one-shot.
    gestures.tick(2000);
    assert_eq!(fired.get(), 1);
}

#[test]
fn double_tap_suppresses_the_pending_tap() {
    let mut gestures = controller();
    let fired = tap_counter(&mut gestures);

    gestures.handle(&GestureSample::tap(1000));
    gestures.handle(&GestureSample::double_tap(1100));
    gestures.tick(2000);

    assert_eq!(fired.get(), 0, "suppressed tap must not fire");
    assert_eq!(gestures.transform().scale, 2.0, "toggle must still apply");
}

#[test]
fn tap_can_fire_from_a_later_sample_timestamp() {
    let mut gestures = controller();
    let fired = tap_counter(&mut gestures);

    gestures.handle(&GestureSample::tap(1000));
    // No explicit tick: the next sample's timestamp advances the timers.
    gestures.handle(&GestureSample::press(1400));
    assert_eq!(fired.get(), 1);
}

#[test]
fn retapping_restarts_the_window() {
    let mut gestures = controller();
    let fired = tap_counter(&mut gestures);

    gestures.handle(&GestureSample::tap(1000));
    gestures.handle(&GestureSample::tap(1200));

    // The first deadline passes without firing; only the second counts.
    gestures.tick(1350);
    assert_eq!(fired.get(), 0);
    gestures.tick(1500);
    assert_eq!(fired.get(), 1);
}

#[test]
fn last_tap_registration_wins() {
    let mut gestures = controller();
    let first = tap_counter(&mut gestures);
    let second = tap_counter(&mut gestures);

    gestures.handle(&GestureSample::tap(0));
    gestures.tick(300);

    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[test]
fn double_tap_toggles_to_max_and_back_to_rest() {
    let mut gestures = controller();

    gestures.handle(&GestureSample::double_tap(0));
    let zoomed = gestures.transform();
    assert_eq!(zoomed.scale, 2.0);
    assert_eq!(zoomed.origin.x, 250.0);
    assert_eq!(zoomed.origin.y, 150.0);

    // Pan somewhere first so the reset has something to undo.
    gestures.handle(&GestureSample::pan(GesturePhase::Start, 100, Vec2::ZERO));
    gestures.handle(&GestureSample::pan(
        GesturePhase::Move,
        116,
        Vec2::new(40.0, 30.0),
    ));
    assert_ne!(gestures.transform().offset, Vec2::ZERO);

    gestures.handle(&GestureSample::double_tap(500));
    let rest = gestures.transform();
    assert_eq!(rest.scale, 1.0);
    assert_eq!(rest.offset, Vec2::ZERO);
    assert_eq!(rest.origin.x, 0.0);
    assert_eq!(rest.origin.y, 0.0);
}

#[test]
fn double_tap_resets_a_pinched_scale() {
    let mut gestures = controller();

    gestures.handle(&GestureSample::pinch(GesturePhase::Start, 0, 1.0));
    gestures.handle(&GestureSample::pinch(GesturePhase::End, 20, 1.4));
    assert_eq!(gestures.transform().scale, 1.4);

    gestures.handle(&GestureSample::double_tap(500));
    assert_eq!(gestures.transform().scale, 1.0);
}

#[test]
fn press_changes_nothing() {
    let mut gestures = controller();
    let before = gestures.transform();

    assert!(!gestures.handle(&GestureSample::press(0)));
    assert_eq!(gestures.transform(), before);
}
