// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scene construction: one static boundary plus a rectangular stack of bouncing bodies.
//!
//! [`build_scene`] is pure (viewport coordinates in, layout out); [`spawn_scene`]
//! registers the layout with the Rapier world and attaches flat 2D visuals.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::core::components::{BodyRadius, Boundary, StackBody};
use crate::core::config::{parse_hex_color, GameConfig, StackConfig};
use crate::core::viewport::Viewport;
use crate::physics::rapier::air_friction_to_damping;

/// Collider depth of the ring wall, extending outward from the stroke's inner edge.
const WALL_THICKNESS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLayout {
    /// Viewport coordinates.
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    pub column: u32,
    pub row: u32,
    /// Viewport coordinates.
    pub center: Vec2,
    pub radius: f32,
    pub restitution: f32,
    pub air_friction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub boundary: BoundaryLayout,
    pub bodies: Vec<BodyLayout>,
}

impl SceneLayout {
    pub fn dynamic_count(&self) -> usize {
        self.bodies.len()
    }

    /// Dynamic bodies plus the boundary.
    pub fn body_count(&self) -> usize {
        self.bodies.len() + 1
    }
}

/// Center of grid cell (`column`, `row`). The stack origin is the top-left of the
/// first body's bounding box; each column/row advances by one diameter plus its gap.
pub fn stack_cell_center(stack: &StackConfig, column: u32, row: u32) -> Vec2 {
    let origin: Vec2 = stack.origin.into();
    let r = stack.radius;
    Vec2::new(
        origin.x + r + column as f32 * (2.0 * r + stack.gap_x),
        origin.y + r + row as f32 * (2.0 * r + stack.gap_y),
    )
}

pub fn build_scene(viewport: &Viewport, cfg: &GameConfig) -> SceneLayout {
    let stack = &cfg.stack;
    let bodies = (0..stack.rows)
        .flat_map(|row| (0..stack.columns).map(move |column| (column, row)))
        .map(|(column, row)| BodyLayout {
            column,
            row,
            center: stack_cell_center(stack, column, row),
            radius: stack.radius,
            restitution: stack.restitution,
            air_friction: stack.air_friction,
        })
        .collect();
    SceneLayout {
        boundary: BoundaryLayout {
            center: viewport.center(),
            radius: cfg.boundary.radius,
        },
        bodies,
    }
}

/// Closed wall approximated by `segments` overlapping cuboids whose inner faces sit on `inner_radius`.
pub fn ring_collider(inner_radius: f32, thickness: f32, segments: u32) -> Collider {
    let n = segments.max(3);
    let step = TAU / n as f32;
    let half_thickness = thickness * 0.5;
    let mid = inner_radius + half_thickness;
    // Outer corners must meet, so size each piece on the outer circumference.
    let half_len = (inner_radius + thickness) * (PI / n as f32).tan();
    let parts = (0..n)
        .map(|i| {
            let angle = (i as f32 + 0.5) * step;
            let offset = Vec2::from_angle(angle) * mid;
            (
                offset,
                angle + PI * 0.5,
                Collider::cuboid(half_len, half_thickness),
            )
        })
        .collect();
    Collider::compound(parts)
}

/// Grid cells whose body intersects the ring wall band `[inner, inner + thickness]`
/// around the boundary center. Rapier resolves those overlaps on the first step.
pub fn cells_overlapping_wall(layout: &SceneLayout, inner: f32, thickness: f32) -> Vec<(u32, u32)> {
    let outer = inner + thickness;
    layout
        .bodies
        .iter()
        .filter(|b| {
            let d = b.center.distance(layout.boundary.center);
            d + b.radius > inner && d - b.radius < outer
        })
        .map(|b| (b.column, b.row))
        .collect()
}

fn color_or(hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or_else(|e| {
        warn!("{e}; using fallback");
        fallback
    })
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Headless runs (MinimalPlugins) carry no asset storages.
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<ColorMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<ColorMaterial>>();
        }
        app.add_systems(Startup, spawn_scene);
    }
}

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
) {
    let layout = build_scene(&viewport, &cfg);

    let b = &cfg.boundary;
    let stroke = b.stroke_width.max(0.5);
    let inner = (layout.boundary.radius - stroke * 0.5).max(0.0);
    let collider = if b.solid {
        Collider::ball(layout.boundary.radius)
    } else {
        let overlapping = cells_overlapping_wall(&layout, inner, WALL_THICKNESS);
        if !overlapping.is_empty() {
            warn!(
                count = overlapping.len(),
                "Stack cells {:?} start inside the boundary wall and will be pushed out",
                overlapping
            );
        }
        ring_collider(inner, WALL_THICKNESS, b.segments)
    };
    let boundary_center = viewport.to_world(layout.boundary.center);
    commands.spawn((
        Name::new("Boundary"),
        Boundary {
            radius: layout.boundary.radius,
        },
        RigidBody::Fixed,
        collider,
        Transform::from_translation(boundary_center.extend(0.0)),
        Mesh2d(meshes.add(Annulus::new(inner, layout.boundary.radius + stroke * 0.5))),
        MeshMaterial2d(materials.add(color_or(&b.stroke_color, Color::BLACK))),
    ));

    let s = &cfg.stack;
    let damping = air_friction_to_damping(s.air_friction, cfg.physics.step_hz);
    let fill = materials.add(color_or(&s.color, Color::srgb(0.43, 0.59, 0.65)));
    let circle = meshes.add(Circle::new(s.radius));
    for body in &layout.bodies {
        let pos = viewport.to_world(body.center);
        commands.spawn((
            Name::new(format!("Body({}, {})", body.column, body.row)),
            StackBody {
                column: body.column,
                row: body.row,
            },
            BodyRadius(body.radius),
            RigidBody::Dynamic,
            Collider::ball(body.radius),
            Velocity::zero(),
            Restitution::coefficient(body.restitution),
            Damping {
                linear_damping: damping,
                angular_damping: 0.0,
            },
            Transform::from_translation(pos.extend(1.0)),
            Mesh2d(circle.clone()),
            MeshMaterial2d(fill.clone()),
        ));
    }

    info!(
        dynamic = layout.dynamic_count(),
        total = layout.body_count(),
        "Scene spawned ({}x{} stack, boundary r={})",
        s.columns,
        s.rows,
        layout.boundary.radius
    );
}
