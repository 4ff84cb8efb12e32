// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::ViewportSet;
use crate::core::viewport::Viewport;

/// The scene camera; acts as the viewport's attached renderer.
#[derive(Component, Debug)]
pub struct SceneCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            align_camera_to_viewport
                .after(ViewportSet)
                .run_if(resource_changed::<Viewport>),
        );
    }
}

fn setup_camera(mut commands: Commands, mut viewport: ResMut<Viewport>) {
    viewport.attach_renderer();
    let anchor = viewport.camera_anchor().unwrap_or_default();
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn((
        Name::new("SceneCamera"),
        SceneCamera,
        Camera2d,
        Transform::from_translation(anchor.extend(0.0)),
    ));
}

/// Keep the surface's top-left corner at the world origin after a resize.
pub fn align_camera_to_viewport(
    viewport: Res<Viewport>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(anchor) = viewport.camera_anchor() else {
        return;
    };
    for mut tf in &mut cameras {
        if tf.translation.truncate() != anchor {
            tf.translation.x = anchor.x;
            tf.translation.y = anchor.y;
        }
    }
}
