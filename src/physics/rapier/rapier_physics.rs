// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

/// Installs Rapier at the configured scale and applies world gravity.
pub struct PhysicsSetupPlugin {
    pub pixels_per_meter: f32,
    pub debug_render: bool,
}

impl PhysicsSetupPlugin {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            pixels_per_meter: cfg.physics.pixels_per_meter.max(f32::EPSILON),
            debug_render: cfg.rapier_debug,
        }
    }
}

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            self.pixels_per_meter,
        ))
        .add_systems(PostStartup, configure_gravity);
        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// RapierConfiguration lives on the default context entity (spawned during Startup).
pub fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    let gravity: Vec2 = game_cfg.physics.gravity.into();
    for mut cfg in &mut q_cfg {
        cfg.gravity = gravity;
    }
    info!(x = gravity.x, y = gravity.y, "Rapier gravity configured");
}

/// Convert per-step air friction `f` (velocity keeps `1 - f` each step at `step_hz`)
/// into Rapier's linear damping, where one step scales velocity by `1 / (1 + dt * d)`.
pub fn air_friction_to_damping(air_friction: f32, step_hz: f32) -> f32 {
    let f = air_friction.clamp(0.0, 0.999);
    if step_hz <= 0.0 || f == 0.0 {
        return 0.0;
    }
    let dt = 1.0 / step_hz;
    f / ((1.0 - f) * dt)
}
