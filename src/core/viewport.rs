// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drawable surface size tracking.
//!
//! Viewport coordinates match pointer events: origin top-left, y down. The
//! camera is anchored so viewport `(x, y)` is world `(x, -y)` at every size,
//! which keeps the scene pinned to the surface's top-left corner on resize.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::core::system::system_order::ViewportSet;
use crate::interaction::listeners::{bind_listener, listening, Listener};

/// Dimensions the renderer currently draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererTarget {
    pub width: f32,
    pub height: f32,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    renderer: Option<RendererTarget>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            renderer: None,
        }
    }
}

fn valid_dimension(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Viewport {
    /// Invalid dimensions fall back to the defaults.
    pub fn new(width: f32, height: f32) -> Self {
        let mut vp = Self::default();
        vp.resize(width, height);
        vp
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn renderer_target(&self) -> Option<RendererTarget> {
        self.renderer
    }

    /// Attach a renderer; its target immediately matches the current size.
    pub fn attach_renderer(&mut self) {
        self.renderer = Some(RendererTarget {
            width: self.width,
            height: self.height,
        });
    }

    /// Apply a new surface size. Non-positive or non-finite dimensions are
    /// ignored and the last valid size is kept. Returns whether it applied.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !valid_dimension(width) || !valid_dimension(height) {
            return false;
        }
        self.width = width;
        self.height = height;
        if let Some(target) = self.renderer.as_mut() {
            target.width = width;
            target.height = height;
        }
        true
    }

    /// Viewport point -> world point.
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }

    /// World point -> viewport point.
    pub fn to_viewport(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }

    /// Viewport-space displacement -> world-space displacement.
    pub fn delta_to_world(&self, d: Vec2) -> Vec2 {
        Vec2::new(d.x, -d.y)
    }

    /// World position the camera must sit at so the top-left corner maps to the origin.
    pub fn camera_anchor(&self) -> Option<Vec2> {
        self.renderer
            .map(|t| Vec2::new(t.width * 0.5, -t.height * 0.5))
    }
}

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>().add_event::<WindowResized>();
        bind_listener(app, Listener::Resize);
        app.add_systems(PreStartup, require_primary_surface)
            .add_systems(
                Update,
                track_window_resize
                    .in_set(ViewportSet)
                    .run_if(listening(Listener::Resize)),
            );
    }
}

/// Startup gate: without a primary window there is nothing to draw into.
pub fn require_primary_surface(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    mut exit: EventWriter<AppExit>,
) {
    match windows.single() {
        Ok(window) => {
            if viewport.resize(window.width(), window.height()) {
                info!(
                    width = viewport.width(),
                    height = viewport.height(),
                    "Viewport initialised from primary window"
                );
            } else {
                warn!(
                    "Primary window reports {}x{}; keeping {}x{}",
                    window.width(),
                    window.height(),
                    viewport.width(),
                    viewport.height()
                );
            }
        }
        Err(e) => {
            error!("No drawable surface (primary window) available: {e}");
            exit.write(AppExit::error());
        }
    }
}

pub fn track_window_resize(
    mut events: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let primary = primary.single().ok();
    for ev in events.read() {
        if primary.is_some_and(|p| p != ev.window) {
            continue;
        }
        if viewport.resize(ev.width, ev.height) {
            trace!("Viewport resized to {}x{}", ev.width, ev.height);
        } else {
            warn!("Ignoring invalid resize {}x{}", ev.width, ev.height);
        }
    }
}
