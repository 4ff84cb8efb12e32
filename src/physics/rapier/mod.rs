// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod rapier_physics;

pub use rapier_physics::{air_friction_to_damping, PhysicsSetupPlugin};
