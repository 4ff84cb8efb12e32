// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod scene;

pub use scene::{build_scene, BodyLayout, BoundaryLayout, SceneLayout, ScenePlugin};
