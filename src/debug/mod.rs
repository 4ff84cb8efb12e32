// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Periodic simulation stats logging (feature `debug`, on by default).
use bevy::prelude::*;

use crate::app::simulation_loop::SimulationLoop;
use crate::core::components::StackBody;
use crate::core::config::GameConfig;
use crate::interaction::shake::PointerState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, debug_logging_system);
    }
}

pub fn debug_logging_system(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    sim: Res<SimulationLoop>,
    pointer: Option<Res<PointerState>>,
    bodies: Query<(), With<StackBody>>,
    mut time_accum: Local<f32>,
) {
    *time_accum += time.delta_secs();
    if *time_accum < cfg.debug.log_interval.max(0.05) {
        return;
    }
    *time_accum = 0.0;
    let pointer = pointer.and_then(|p| p.position);
    info!(
        "SIM frame={} t={:.3}s bodies={} state={:?} pointer={:?}",
        sim.frames(),
        time.elapsed_secs(),
        bodies.iter().count(),
        sim.state(),
        pointer
    );
}
