// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::simulation_loop::{loop_running, SimulationLoop};
use crate::core::components::StackBody;
use crate::core::config::GameConfig;
use crate::core::viewport::Viewport;

/// Last observed cursor position, in viewport coordinates.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

/// Per-event stack translation for a pointer at `pointer` (viewport space).
pub fn shake_displacement(pointer: Vec2, center: Vec2, scale: f32) -> Vec2 {
    (pointer - center) * scale
}

pub fn track_pointer(mut events: EventReader<CursorMoved>, mut pointer: ResMut<PointerState>) {
    if let Some(ev) = events.read().last() {
        pointer.position = Some(ev.position);
    }
}

/// Every pointer-move event nudges the whole stack by the same vector. Effects
/// accumulate; containment is left to the boundary collider. Moves made while
/// the loop is paused are dropped, not replayed on resume.
pub fn shake_stack(
    mut events: EventReader<CursorMoved>,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
    sim: Option<Res<SimulationLoop>>,
    mut bodies: Query<&mut Transform, With<StackBody>>,
) {
    if !loop_running(sim) {
        events.clear();
        return;
    }
    let scale = cfg.interaction.shake_scale;
    for ev in events.read() {
        let d = shake_displacement(ev.position, viewport.center(), scale);
        if d == Vec2::ZERO {
            continue;
        }
        let world = viewport.delta_to_world(d).extend(0.0);
        for mut tf in &mut bodies {
            tf.translation += world;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_is_zero() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(
            shake_displacement(vp.center(), vp.center(), 0.001),
            Vec2::ZERO
        );
    }

    #[test]
    fn right_of_center_pushes_right() {
        let vp = Viewport::new(800.0, 600.0);
        let d = shake_displacement(Vec2::new(900.0, 300.0), vp.center(), 0.001);
        assert!((d - Vec2::new(0.5, 0.0)).length() < 1e-6, "{d:?}");
        assert_eq!(vp.delta_to_world(Vec2::new(0.0, 2.0)), Vec2::new(0.0, -2.0));
    }
}
