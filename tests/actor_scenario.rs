//! Full gameplay loop against the stub renderer: rest, walk, a running jump,
//! the fall back to ground, and the animation hand-back once the one-shot
//! jump clip runs out.

use glam::Vec3;
use std::sync::Arc;
use tunnel_runner::clip::{ClipCatalog, ClipDef};
use tunnel_runner::config::DemoConfig;
use tunnel_runner::input::{self, PadButtons, PadSticks};
use tunnel_runner::selector::AnimState;
use tunnel_runner::{Actor, StubRenderer};

const DT: f32 = 0.016;

fn catalog() -> ClipCatalog {
    let def = |name: &str, duration: f32| ClipDef { name: Arc::from(name), duration, keyframe_count: 8 };
    ClipCatalog::from_entries(vec![def("Idle", 2.0), def("Walk", 0.8), def("Run", 0.6), def("Jump", 0.5)])
        .expect("catalog")
}

fn spawn() -> (Actor, StubRenderer) {
    let mut renderer = StubRenderer::with_catalog(catalog());
    let actor = Actor::spawn(DemoConfig::default(), &mut renderer).expect("spawn");
    (actor, renderer)
}

fn forward_stick() -> PadSticks {
    PadSticks { stick_x: 0, stick_y: 127 }
}

#[test]
fn rest_walk_jump_land_and_recover() {
    let (mut actor, mut renderer) = spawn();

    // At rest the character idles in place.
    actor.tick(PadButtons::default(), PadSticks::default(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Idle);
    assert!(actor.locomotion.grounded);
    let rest_position = actor.locomotion.position;

    // Full forward stick starts the walk and moves the character.
    actor.tick(PadButtons::default(), forward_stick(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Walking);
    let walked = actor.locomotion.position - rest_position;
    assert!(walked.length() > 0.0, "forward input displaces the character");
    assert!(walked.dot(actor.locomotion.forward()) > 0.0, "displacement follows the facing");

    // A while moving launches the jump: upward velocity, airborne, one-shot clip.
    let jump = PadButtons { a: true, ..PadButtons::default() };
    actor.tick(jump, forward_stick(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Jumping);
    assert!(!actor.locomotion.grounded);
    assert!(actor.locomotion.velocity_y > 0.0);
    assert!(actor.locomotion.position.y > 0.0);

    // Gravity brings the character back down within a bounded number of ticks.
    let mut ticks_airborne = 1;
    while !actor.locomotion.grounded {
        actor.tick(PadButtons::default(), forward_stick(), false, DT, &mut renderer);
        ticks_airborne += 1;
        assert!(ticks_airborne < 100, "jump arc must terminate");
    }
    assert_eq!(actor.locomotion.position.y, 0.0, "landing clamps to the ground plane");
    assert_eq!(actor.locomotion.velocity_y, 0.0);

    // The jump clip keeps playing past the landing; once it finishes the
    // selector hands back to Walk because forward is still held.
    let mut ticks_after_landing = 0;
    while actor.selector.state() == AnimState::Jumping {
        actor.tick(PadButtons::default(), forward_stick(), false, DT, &mut renderer);
        ticks_after_landing += 1;
        assert!(ticks_after_landing < 100, "one-shot jump clip must finish");
    }
    assert_eq!(actor.selector.state(), AnimState::Walking);

    // Releasing the stick drops back to Idle on the falling edge.
    actor.tick(PadButtons::default(), PadSticks::default(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Idle);
}

#[test]
fn run_button_doubles_ground_speed() {
    let (mut actor, mut renderer) = spawn();
    actor.tick(PadButtons::default(), forward_stick(), false, DT, &mut renderer);
    let walk_start = actor.locomotion.position;
    actor.tick(PadButtons::default(), forward_stick(), false, DT, &mut renderer);
    let walk_step = (actor.locomotion.position - walk_start).length();

    let run = PadButtons { z: true, ..PadButtons::default() };
    let run_start = actor.locomotion.position;
    actor.tick(run, forward_stick(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Running);
    let run_step = (actor.locomotion.position - run_start).length();
    assert!((run_step - walk_step * 2.0).abs() < 1e-3, "run covers twice the walk distance per tick");
}

#[test]
fn digital_pad_substitutes_for_a_centered_stick() {
    let intent = input::normalize(PadButtons { d_up: true, ..PadButtons::default() }, PadSticks::default());
    assert_eq!(intent.move_forward, 1.0);
    assert_eq!(intent.move_right, 0.0);

    // And it drives the actor the same way the stick does.
    let (mut actor, mut renderer) = spawn();
    let before = actor.locomotion.position;
    actor.tick(PadButtons { d_up: true, ..PadButtons::default() }, PadSticks::default(), false, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Walking);
    assert!((actor.locomotion.position - before).length() > 0.0);
}

#[test]
fn menu_freezes_gameplay_but_keeps_posing() {
    let (mut actor, mut renderer) = spawn();
    actor.tick(PadButtons::default(), PadSticks::default(), false, DT, &mut renderer);

    // Physics still integrates (the menu only gates animation transitions at
    // this layer), but the selector never leaves Idle while suppressed.
    actor.tick(PadButtons::default(), forward_stick(), true, DT, &mut renderer);
    assert_eq!(actor.selector.state(), AnimState::Idle);
    assert!(renderer.last_pose(actor.skeleton()).is_some(), "skeleton still receives a pose");
}

#[test]
fn camera_trails_behind_the_facing() {
    let (mut actor, mut renderer) = spawn();
    actor.tick(PadButtons::default(), PadSticks::default(), false, DT, &mut renderer);
    let eye = actor.camera_position();
    let target = actor.camera_target();
    let forward = actor.locomotion.forward();
    let to_target = (target - eye) * Vec3::new(1.0, 0.0, 1.0);
    assert!(to_target.dot(forward) > 0.0, "camera looks along the character's facing");
    assert!(eye.y > target.y, "eye rides above the look-at point");
}
