// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Viewport (window resize -> viewport + camera)
//! 2. PrePhysics (pointer translation / drag edits before Rapier)
//! 3. Rapier (handled by plugin, `PostUpdate`)
//! 4. PostPhysicsAdjust (loop bookkeeping, teardown)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ViewportSet; // resize handling; pointer math reads the result

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // transform edits applied before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight work after input handling
