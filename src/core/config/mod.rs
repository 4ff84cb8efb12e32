// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod config;

pub use config::{
    parse_hex_color, BoundaryConfig, DebugConfig, DragConfig, GameConfig,
    InteractionConfig, PhysicsConfig, Point2, StackConfig, WindowConfig, DEFAULT_CONFIG_LAYERS,
};
