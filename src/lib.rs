// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod core;
#[cfg(feature = "debug")]
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigDiagnostics, GamePlugin};
pub use app::simulation_loop::{LoopState, SimulationLoop};
pub use core::components::{BodyRadius, Boundary, StackBody};
pub use core::config::{GameConfig, WindowConfig};
pub use core::viewport::Viewport;
