// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

// Stops the simulation loop after `window.autoClose` seconds (if > 0).
// 0.0 (default) => run until the window closes or Escape is pressed.

use bevy::prelude::*;

use crate::app::simulation_loop::SimulationLoop;
use crate::core::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will stop after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut sim: ResMut<SimulationLoop>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.just_finished() {
            info!("AutoClose: timer finished, stopping simulation loop");
            sim.stop();
        }
    }
}
