// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pointer-driven behavior: stack shaking on cursor movement and the mouse constraint.
pub mod drag;
pub mod listeners;
pub mod session;
pub mod shake;

use bevy::prelude::*;

use crate::app::simulation_loop::loop_running;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use drag::{grab_or_release, pull_grabbed_body, MouseConstraint};
use listeners::{bind_listener, listening, Listener};
use shake::{shake_stack, track_pointer, PointerState};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<MouseConstraint>()
            .add_event::<CursorMoved>();
        bind_listener(app, Listener::PointerMove);
        bind_listener(app, Listener::PointerDrag);

        // Pointer position first; shake and drag both read it in the same frame.
        app.add_systems(
            Update,
            (
                track_pointer,
                shake_stack,
                (grab_or_release, pull_grabbed_body.run_if(loop_running))
                    .chain()
                    .run_if(listening(Listener::PointerDrag))
                    .run_if(drag_enabled)
                    .run_if(resource_exists::<ButtonInput<MouseButton>>),
            )
                .chain()
                .in_set(PrePhysicsSet)
                .run_if(listening(Listener::PointerMove)),
        );
    }
}

fn drag_enabled(cfg: Res<GameConfig>) -> bool {
    cfg.interaction.drag.enabled
}
