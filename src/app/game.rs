// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::simulation_loop::SimulationLoopPlugin;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet, ViewportSet};
use crate::core::viewport::ViewportPlugin;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::scene::ScenePlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::InteractionPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

/// Where the config came from and what `validate()` said about it; logged at startup
/// because `main` runs before the log subscriber exists.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub layers: Vec<String>,
    pub problems: Vec<String>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with(GameConfig::default)
            .clone();
        app.init_resource::<ConfigDiagnostics>()
            .configure_sets(
                Update,
                (
                    ViewportSet,
                    PrePhysicsSet.after(ViewportSet),
                    PostPhysicsAdjustSet.after(PrePhysicsSet),
                ),
            )
            .add_plugins((
                ViewportPlugin,
                CameraPlugin,
                PhysicsSetupPlugin::from_config(&cfg),
                ScenePlugin,
                InteractionPlugin,
                SimulationLoopPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, report_config);
    }
}

fn report_config(diag: Res<ConfigDiagnostics>) {
    if diag.layers.is_empty() {
        info!("Config: built-in defaults");
    } else {
        info!("Config layers: {}", diag.layers.join(", "));
    }
    for p in &diag.problems {
        warn!("Config: {p}");
    }
}
