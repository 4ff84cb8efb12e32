// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cancellable simulation / redraw loop.
//!
//! Bevy's runner already reschedules a frame after every frame; this resource
//! decides whether that continues. `stop()` pauses the Rapier pipeline, disposes
//! bound listeners and asks the app to exit, so no further frame is scheduled.

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierConfiguration;

use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::interaction::listeners::{
    bind_listener, listening, BoundListeners, Listener, ListenerRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
}

#[derive(Resource, Debug, Default)]
pub struct SimulationLoop {
    state: LoopState,
    frames: u64,
}

impl SimulationLoop {
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames redrawn while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Idle -> Running. Any other state is left alone.
    pub fn start(&mut self) -> bool {
        self.transition(LoopState::Idle, LoopState::Running)
    }

    pub fn pause(&mut self) -> bool {
        self.transition(LoopState::Running, LoopState::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.transition(LoopState::Paused, LoopState::Running)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.pause() || self.resume()
    }

    /// Terminal: prevents the next reschedule. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        info!(from = ?self.state, "Simulation loop stopping");
        self.state = LoopState::Stopped;
        true
    }

    /// One redraw tick; counts only while running.
    pub fn tick(&mut self) -> bool {
        if self.is_running() {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    fn transition(&mut self, from: LoopState, to: LoopState) -> bool {
        if self.state != from {
            return false;
        }
        info!(?from, ?to, "Simulation loop transition");
        self.state = to;
        true
    }
}

pub struct SimulationLoopPlugin;

impl Plugin for SimulationLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationLoop>();
        bind_listener(app, Listener::Keyboard);
        app.add_systems(PostStartup, start_loop)
            .add_systems(
                Update,
                (
                    loop_keyboard_controls
                        .run_if(listening(Listener::Keyboard))
                        .run_if(resource_exists::<ButtonInput<KeyCode>>),
                    sync_physics_pipeline,
                    teardown_when_stopped,
                )
                    .chain()
                    .in_set(PostPhysicsAdjustSet),
            )
            .add_systems(Last, redraw_tick);
    }
}

/// Run condition for input that edits the scene. Without a loop resource the
/// input always applies.
pub fn loop_running(sim: Option<Res<SimulationLoop>>) -> bool {
    sim.is_none_or(|s| s.is_running())
}

pub fn start_loop(mut sim: ResMut<SimulationLoop>) {
    sim.start();
}

/// Escape stops for good; P toggles pause.
pub fn loop_keyboard_controls(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimulationLoop>) {
    if keys.just_pressed(KeyCode::Escape) {
        sim.stop();
    } else if keys.just_pressed(KeyCode::KeyP) {
        sim.toggle_pause();
    }
}

/// Physics steps only while running.
pub fn sync_physics_pipeline(
    sim: Res<SimulationLoop>,
    mut rapier: Query<&mut RapierConfiguration>,
) {
    let active = sim.is_running();
    for mut cfg in &mut rapier {
        if cfg.physics_pipeline_active != active {
            cfg.physics_pipeline_active = active;
        }
    }
}

pub fn teardown_when_stopped(
    sim: Res<SimulationLoop>,
    mut registry: ResMut<ListenerRegistry>,
    mut bound: ResMut<BoundListeners>,
    mut exit: EventWriter<AppExit>,
    mut done: Local<bool>,
) {
    if *done || sim.state() != LoopState::Stopped {
        return;
    }
    *done = true;
    let disposed = bound.dispose_all(&mut registry);
    info!(
        disposed,
        frames = sim.frames(),
        "Simulation loop stopped; listeners detached, requesting app exit"
    );
    exit.write(AppExit::Success);
}

pub fn redraw_tick(mut sim: ResMut<SimulationLoop>) {
    sim.tick();
}
