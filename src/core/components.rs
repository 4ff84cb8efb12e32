// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// The static circular wall. Spawned once; its transform and radius never change.
#[derive(Component, Debug, Clone, Copy)]
pub struct Boundary {
    pub radius: f32,
}

/// Marker for every member of the dynamic-body group (the stack).
#[derive(Component, Debug, Clone, Copy)]
pub struct StackBody {
    pub column: u32,
    pub row: u32,
}

/// Collider / visual radius of a dynamic body.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BodyRadius(pub f32);
