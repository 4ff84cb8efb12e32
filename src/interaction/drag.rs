// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::app::simulation_loop::{loop_running, SimulationLoop};
use crate::core::components::{BodyRadius, StackBody};
use crate::core::config::GameConfig;
use crate::core::viewport::Viewport;
use crate::interaction::shake::PointerState;

/// Soft pointer constraint: the grabbed body is sprung toward the cursor through its velocity.
#[derive(Resource, Debug, Default)]
pub struct MouseConstraint {
    pub body: Option<Entity>,
}

/// Velocity change that would close `stiffness` of the body/anchor gap within one step.
pub fn constraint_impulse(body: Vec2, anchor: Vec2, stiffness: f32, step_hz: f32) -> Vec2 {
    (anchor - body) * stiffness.clamp(0.0, 1.0) * step_hz.max(0.0)
}

/// Release always applies; grabbing waits for a running loop.
pub fn grab_or_release(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
    sim: Option<Res<SimulationLoop>>,
    mut constraint: ResMut<MouseConstraint>,
    bodies: Query<(Entity, &Transform, &BodyRadius), With<StackBody>>,
) {
    if buttons.just_released(MouseButton::Left) {
        if let Some(e) = constraint.body.take() {
            debug!(?e, "Mouse constraint released");
        }
    }
    if constraint.body.is_some() || !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if !loop_running(sim) {
        return;
    }
    let Some(cursor) = pointer.position else {
        return;
    };
    let world = viewport.to_world(cursor);
    let slack = cfg.interaction.drag.grab_radius.max(0.0);
    let mut nearest: Option<(Entity, f32)> = None;
    for (e, tf, radius) in &bodies {
        let d2 = tf.translation.truncate().distance_squared(world);
        let reach = radius.0 + slack;
        if d2 > reach * reach {
            continue;
        }
        if nearest.is_none_or(|(_, best)| d2 < best) {
            nearest = Some((e, d2));
        }
    }
    if let Some((e, _)) = nearest {
        debug!(?e, "Mouse constraint grabbed body");
        constraint.body = Some(e);
    }
}

pub fn pull_grabbed_body(
    pointer: Res<PointerState>,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
    mut constraint: ResMut<MouseConstraint>,
    mut bodies: Query<(&Transform, &mut Velocity), With<StackBody>>,
) {
    let (Some(e), Some(cursor)) = (constraint.body, pointer.position) else {
        return;
    };
    let Ok((tf, mut vel)) = bodies.get_mut(e) else {
        constraint.body = None;
        return;
    };
    let drag = &cfg.interaction.drag;
    let anchor = viewport.to_world(cursor);
    vel.linvel += constraint_impulse(
        tf.translation.truncate(),
        anchor,
        drag.stiffness,
        cfg.physics.step_hz,
    );
    if drag.max_speed > 0.0 {
        vel.linvel = vel.linvel.clamp_length_max(drag.max_speed);
    }
}
