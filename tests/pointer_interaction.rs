// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use globe_shaker::interaction::drag::MouseConstraint;
use globe_shaker::interaction::listeners::{BoundListeners, ListenerRegistry};
use globe_shaker::interaction::shake::PointerState;
use globe_shaker::interaction::InteractionPlugin;
use globe_shaker::{BodyRadius, GameConfig, SimulationLoop, StackBody, Viewport};

fn pointer_app() -> (App, Vec<Entity>) {
    let mut app = App::new();
    app.add_event::<CursorMoved>()
        .insert_resource(GameConfig::default())
        .insert_resource(Viewport::new(800.0, 600.0))
        .add_plugins(InteractionPlugin);
    let bodies = [Vec2::new(325.0, -175.0), Vec2::new(380.0, -175.0), Vec2::new(325.0, -230.0)]
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            app.world_mut()
                .spawn((
                    StackBody { column: i as u32, row: 0 },
                    BodyRadius(25.0),
                    Velocity::zero(),
                    Transform::from_translation(p.extend(1.0)),
                ))
                .id()
        })
        .collect();
    (app, bodies)
}

fn move_pointer(app: &mut App, x: f32, y: f32) {
    app.world_mut().send_event(CursorMoved {
        window: Entity::PLACEHOLDER,
        position: Vec2::new(x, y),
        delta: None,
    });
}

fn positions(app: &App, bodies: &[Entity]) -> Vec<Vec2> {
    bodies
        .iter()
        .map(|e| app.world().get::<Transform>(*e).unwrap().translation.truncate())
        .collect()
}

fn assert_shifted(before: &[Vec2], after: &[Vec2], expected: Vec2) {
    for (b, a) in before.iter().zip(after) {
        assert!(
            ((*a - *b) - expected).length() < 1e-4,
            "expected shift {expected:?}, got {:?}",
            *a - *b
        );
    }
}

#[test]
fn pointer_right_of_center_shifts_every_body_by_half_unit() {
    let (mut app, bodies) = pointer_app();
    let before = positions(&app, &bodies);
    move_pointer(&mut app, 900.0, 300.0);
    app.update();
    assert_shifted(&before, &positions(&app, &bodies), Vec2::new(0.5, 0.0));
    assert_eq!(
        app.world().resource::<PointerState>().position,
        Some(Vec2::new(900.0, 300.0))
    );
}

#[test]
fn pointer_at_center_does_not_move_the_stack() {
    let (mut app, bodies) = pointer_app();
    let before = positions(&app, &bodies);
    move_pointer(&mut app, 400.0, 300.0);
    app.update();
    assert_eq!(positions(&app, &bodies), before);
}

#[test]
fn repeated_events_accumulate() {
    let (mut app, bodies) = pointer_app();
    let before = positions(&app, &bodies);
    move_pointer(&mut app, 900.0, 400.0);
    app.update();
    let once = positions(&app, &bodies);
    // Viewport (0.5, 0.1) -> world (0.5, -0.1)
    assert_shifted(&before, &once, Vec2::new(0.5, -0.1));

    move_pointer(&mut app, 900.0, 400.0);
    app.update();
    assert_shifted(&before, &positions(&app, &bodies), Vec2::new(1.0, -0.2));
}

#[test]
fn two_events_in_one_frame_both_apply() {
    let (mut app, bodies) = pointer_app();
    let before = positions(&app, &bodies);
    move_pointer(&mut app, 0.0, 300.0);
    move_pointer(&mut app, 0.0, 300.0);
    app.update();
    assert_shifted(&before, &positions(&app, &bodies), Vec2::new(-0.8, 0.0));
}

#[test]
fn disposed_listeners_stop_shaking() {
    let (mut app, bodies) = pointer_app();
    app.world_mut()
        .resource_scope(|world, mut bound: Mut<BoundListeners>| {
            let mut registry = world.resource_mut::<ListenerRegistry>();
            assert_eq!(bound.dispose_all(&mut registry), 2);
        });
    let before = positions(&app, &bodies);
    move_pointer(&mut app, 900.0, 300.0);
    app.update();
    assert_eq!(positions(&app, &bodies), before);
}

fn linvel(app: &App, e: Entity) -> Vec2 {
    app.world().get::<Velocity>(e).unwrap().linvel
}

#[test]
fn mouse_constraint_springs_grabbed_body_through_its_velocity() {
    let (mut app, bodies) = pointer_app();
    app.init_resource::<ButtonInput<MouseButton>>();
    // Zero shake so only the constraint acts.
    app.world_mut()
        .resource_mut::<GameConfig>()
        .interaction
        .shake_scale = 0.0;

    // Cursor over the first body (viewport (325,175) == world (325,-175)).
    move_pointer(&mut app, 325.0, 175.0);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    assert_eq!(
        app.world().resource::<MouseConstraint>().body,
        Some(bodies[0])
    );
    assert_eq!(linvel(&app, bodies[0]), Vec2::ZERO);

    let before = positions(&app, &bodies);
    move_pointer(&mut app, 425.0, 175.0);
    app.update();
    // 0.01 of the 100 unit gap per step at 60 Hz.
    let v = linvel(&app, bodies[0]);
    assert!((v - Vec2::new(60.0, 0.0)).length() < 1e-3, "{v:?}");
    assert_eq!(positions(&app, &bodies), before, "transforms are left to the solver");
    assert_eq!(linvel(&app, bodies[1]), Vec2::ZERO);

    // The spring keeps pulling while the gap stays open.
    app.update();
    assert!(linvel(&app, bodies[0]).x > v.x);

    let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    buttons.clear();
    buttons.release(MouseButton::Left);
    app.update();
    assert_eq!(app.world().resource::<MouseConstraint>().body, None);
    let released = linvel(&app, bodies[0]);
    app.update();
    assert_eq!(linvel(&app, bodies[0]), released);
}

#[test]
fn grabbed_body_speed_is_capped() {
    let (mut app, bodies) = pointer_app();
    app.init_resource::<ButtonInput<MouseButton>>();
    {
        let mut cfg = app.world_mut().resource_mut::<GameConfig>();
        cfg.interaction.shake_scale = 0.0;
        cfg.interaction.drag.stiffness = 1.0;
        cfg.interaction.drag.max_speed = 100.0;
    }
    move_pointer(&mut app, 325.0, 175.0);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    move_pointer(&mut app, 790.0, 175.0);
    app.update();
    assert!((linvel(&app, bodies[0]).length() - 100.0).abs() < 1e-3);
}

#[test]
fn paused_loop_ignores_shake_and_grab() {
    let (mut app, bodies) = pointer_app();
    app.init_resource::<ButtonInput<MouseButton>>();
    let mut sim = SimulationLoop::default();
    sim.start();
    sim.pause();
    app.insert_resource(sim);

    let before = positions(&app, &bodies);
    move_pointer(&mut app, 900.0, 300.0);
    move_pointer(&mut app, 325.0, 175.0);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    assert_eq!(positions(&app, &bodies), before);
    assert_eq!(app.world().resource::<MouseConstraint>().body, None);
    assert_eq!(
        app.world().resource::<PointerState>().position,
        Some(Vec2::new(325.0, 175.0)),
        "pointer is still tracked while paused"
    );

    // Moves made while paused are not replayed on resume.
    app.world_mut().resource_mut::<SimulationLoop>().resume();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
    app.update();
    assert_eq!(positions(&app, &bodies), before);
}
